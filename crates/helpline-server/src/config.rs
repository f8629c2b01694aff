//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Parsing goes through a key lookup so tests never touch the
//! real environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Value shipped in sample `.env` files; treated the same as no key
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";
pub const DEV_SECRET_KEY: &str = "dev-secret-key";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// OpenAI connection settings
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// The API key, unless it is missing, blank or the sample placeholder
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub secret_key: String,
    pub openai: OpenAiConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("HOST", lookup("HOST"), IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "OPENAI_TIMEOUT_SECS",
            lookup("OPENAI_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;

        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "OPENAI_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            secret_key: non_blank(lookup("SECRET_KEY"))
                .unwrap_or_else(|| DEV_SECRET_KEY.to_string()),
            openai: OpenAiConfig {
                api_key: lookup("OPENAI_API_KEY"),
                model: non_blank(lookup("OPENAI_MODEL"))
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: non_blank(lookup("OPENAI_BASE_URL"))
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_blank(value) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.secret_key, DEV_SECRET_KEY);
        assert!(config.uses_dev_secret());
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai.timeout, Duration::from_secs(10));
        assert!(config.openai.usable_api_key().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("SECRET_KEY", "s3cret"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
            ("OPENAI_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.uses_dev_secret());
        assert_eq!(config.openai.usable_api_key(), Some("sk-test"));
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.base_url, "http://localhost:9000/v1");
        assert_eq!(config.openai.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_placeholder_key_is_not_usable() {
        let config = config_from(&[("OPENAI_API_KEY", PLACEHOLDER_API_KEY)]).unwrap();
        assert_eq!(config.openai.api_key.as_deref(), Some(PLACEHOLDER_API_KEY));
        assert!(config.openai.usable_api_key().is_none());
    }

    #[test]
    fn test_blank_key_is_not_usable() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]).unwrap();
        assert!(config.openai.usable_api_key().is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(config_from(&[("OPENAI_TIMEOUT_SECS", "0")]).is_err());
    }
}
