use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Runtime settings that are not part of the Leptos site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub bind_addr: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            bind_addr: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = match get("BACKEND_URL") {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::Invalid {
                        key: "BACKEND_URL",
                        value: url,
                    });
                }
                url.trim_end_matches('/').to_string()
            }
            None => DEFAULT_BACKEND_URL.to_string(),
        };

        let backend_timeout = match get("BACKEND_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BACKEND_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
        };

        Ok(Self {
            backend_url,
            backend_timeout,
            bind_addr: get("BIND_ADDR"),
        })
    }
}
