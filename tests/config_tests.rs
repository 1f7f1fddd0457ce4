mod common;

#[cfg(test)]
pub mod config_tests {
    use std::time::Duration;

    use super::common::*;

    use reciguard::common::*;
    use reciguard::config::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_from_lookup_success() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BACKEND_URL", "https://api.reciguard.test/"),
            ("BACKEND_TIMEOUT_SECS", "3"),
            ("BIND_ADDR", "0.0.0.0:3000"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "https://api.reciguard.test");
        assert_eq!(config.backend_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr.as_deref(), Some("0.0.0.0:3000"));
    }

    #[test]
    fn test_config_blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[("BACKEND_URL", "  "), ("BIND_ADDR", "")])).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.bind_addr, None);
    }

    #[test]
    fn test_config_fails_on_bad_url() {
        let err = AppConfig::from_lookup(lookup(&[("BACKEND_URL", "ftp://x")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "BACKEND_URL",
                value: "ftp://x".to_string(),
            }
        );
    }

    #[test]
    fn test_config_fails_on_bad_timeout() {
        for raw in ["0", "-1", "soon"] {
            let err = AppConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "BACKEND_TIMEOUT_SECS", .. }));
        }
    }
}
