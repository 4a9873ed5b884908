// src/core/config.rs
use std::env;
use std::str::FromStr;
use log::LevelFilter;

use crate::generators::password::DEFAULT_LENGTH;

/// Hard ceiling for `MAX_PASSWORD_LENGTH`; one request never buffers more than this.
pub const MAX_PASSWORD_LENGTH_LIMIT: usize = 1 << 20;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,
    pub api_docs_enabled: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_LENGTH,
            max_password_length: 65536,

            // Web Interface
            web_port: 8080,
            web_address: "0.0.0.0".to_string(),
            api_docs_enabled: false,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        parse_into(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        if config.max_password_length > MAX_PASSWORD_LENGTH_LIMIT {
            log::warn!(
                "MAX_PASSWORD_LENGTH {} exceeds the limit of {}, clamping",
                config.max_password_length,
                MAX_PASSWORD_LENGTH_LIMIT
            );
            config.max_password_length = MAX_PASSWORD_LENGTH_LIMIT;
        }

        if config.default_password_length > config.max_password_length {
            log::warn!(
                "DEFAULT_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, clamping",
                config.default_password_length,
                config.max_password_length
            );
            config.default_password_length = config.max_password_length;
        }

        // Web Interface
        parse_into(&lookup, "WEB_PORT", &mut config.web_port);
        parse_into(&lookup, "API_DOCS_ENABLED", &mut config.api_docs_enabled);

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.max_password_length, 65536);
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.web_address, "0.0.0.0");
        assert!(!config.api_docs_enabled);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("MAX_PASSWORD_LENGTH", "128"),
            ("WEB_PORT", "9000"),
            ("WEB_ADDRESS", "127.0.0.1"),
            ("API_DOCS_ENABLED", "true"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.default_password_length, 24);
        assert_eq!(config.max_password_length, 128);
        assert_eq!(config.web_port, 9000);
        assert_eq!(config.web_address, "127.0.0.1");
        assert!(config.api_docs_enabled);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("WEB_PORT", "not-a-port"),
            ("DEFAULT_PASSWORD_LENGTH", "-3"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_max_length_clamped_to_limit() {
        let config = config_from(&[("MAX_PASSWORD_LENGTH", "4294967295")]);
        assert_eq!(config.max_password_length, MAX_PASSWORD_LENGTH_LIMIT);

        let config = config_from(&[("MAX_PASSWORD_LENGTH", "1048576")]);
        assert_eq!(config.max_password_length, 1048576);
    }

    #[test]
    fn test_default_length_clamped_to_max() {
        let config = config_from(&[("DEFAULT_PASSWORD_LENGTH", "64"), ("MAX_PASSWORD_LENGTH", "32")]);
        assert_eq!(config.default_password_length, 32);
    }
}
