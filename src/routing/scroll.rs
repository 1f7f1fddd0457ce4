use super::pattern::split_path;

/// Something whose scroll position can be reset.
pub trait Viewport {
    fn scroll_to_top(&self);
}

/// Decides when a navigation should reset the viewport.
///
/// Fires for the first location seen and for every pathname change after
/// that. Pathnames are compared as the route table sees them, so query,
/// fragment, trailing or repeated slash changes do not count.
#[derive(Debug, Default, Clone)]
pub struct ScrollReset {
    last_path: Option<String>,
}

impl ScrollReset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the viewport was reset for this location.
    pub fn on_navigate<V: Viewport + ?Sized>(&mut self, location: &str, viewport: &V) -> bool {
        let path = format!("/{}", split_path(location).join("/"));
        if self.last_path.as_deref() == Some(path.as_str()) {
            return false;
        }

        self.last_path = Some(path);
        viewport.scroll_to_top();
        true
    }

    pub fn last_path(&self) -> Option<&str> {
        self.last_path.as_deref()
    }
}
