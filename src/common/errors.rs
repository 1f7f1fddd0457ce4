use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Route pattern {pattern:?} duplicates {existing:?}")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("Route pattern {pattern:?} needs a value for :{name}")]
    MissingParam { pattern: String, name: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Please log in to continue")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Backend service error ({status})")]
    Backend { status: u16 },

    #[error("Could not reach the backend: {0}")]
    Transport(String),
}

impl ApiError {
    /// Maps a non-success backend response onto an error, preferring the
    /// JSON `message` field of the body when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound(if message.is_empty() {
                "resource".to_string()
            } else {
                message
            }),
            400..=499 => Self::Rejected { status, message },
            _ => Self::Backend { status },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
