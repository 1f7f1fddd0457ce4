use crate::common::RouteError;

use super::pattern::{Params, RoutePattern, split_path};

#[derive(Clone, Debug)]
struct RouteEntry<T> {
    pattern: RoutePattern,
    value: T,
}

/// The result of resolving a path against a [`RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<T> {
    pub value: T,
    pub pattern: String,
    pub params: Params,
}

/// An ordered list of (pattern, value) pairs.
///
/// Resolution picks the most specific matching pattern: segments are compared
/// left to right and a static segment outranks a parameter. Declaration order
/// only breaks ties, which a table without duplicate shapes never produces.
#[derive(Clone, Debug)]
pub struct RouteTable<T> {
    entries: Vec<RouteEntry<T>>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> RouteTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let mut table = Self::new();
        for (pattern, value) in entries {
            table.add(pattern, value)?;
        }
        Ok(table)
    }

    pub fn add(&mut self, pattern: &str, value: T) -> Result<(), RouteError> {
        let pattern = RoutePattern::parse(pattern)?;

        if let Some(existing) = self.entries.iter().find(|e| e.pattern.same_shape(&pattern)) {
            return Err(RouteError::DuplicatePattern {
                pattern: pattern.as_str().to_string(),
                existing: existing.pattern.as_str().to_string(),
            });
        }

        self.entries.push(RouteEntry { pattern, value });
        Ok(())
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch<T>> {
        let segments = split_path(path);

        let mut best: Option<(&RouteEntry<T>, Params, Vec<u8>)> = None;
        for entry in &self.entries {
            let Some(params) = entry.pattern.match_segments(&segments) else {
                continue;
            };
            let rank = entry.pattern.specificity();
            let better = match &best {
                Some((_, _, best_rank)) => rank > *best_rank,
                None => true,
            };
            if better {
                best = Some((entry, params, rank));
            }
        }

        best.map(|(entry, params, _)| RouteMatch {
            value: entry.value.clone(),
            pattern: entry.pattern.as_str().to_string(),
            params,
        })
    }

    pub fn pattern_for(&self, value: &T) -> Option<&RoutePattern>
    where
        T: PartialEq,
    {
        self.entries
            .iter()
            .find(|e| e.value == *value)
            .map(|e| &e.pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RoutePattern, &T)> {
        self.entries.iter().map(|e| (&e.pattern, &e.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
