//! Host configuration loaded from the environment at startup.
//!
//! `main` loads `.env` before calling `HostConfig::from_env`, so values there
//! behave like real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: SocketAddr,
    /// Mount the development mock of the exercise backend under `/api`.
    pub mock_backend: bool,
}

/// Parse the usual boolean spellings; anything else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl HostConfig {
    /// Read `BIND_HOST`, `PORT`, and `QURRICULAR_MOCK_BACKEND`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for any variable that is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for any variable that is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = match lookup("BIND_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIND_HOST", raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue("PORT", raw))?,
            None => 3000,
        };

        let mock_backend = match lookup("QURRICULAR_MOCK_BACKEND") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue("QURRICULAR_MOCK_BACKEND", raw))?,
            None => false,
        };

        Ok(Self { bind_addr: SocketAddr::new(host, port), mock_backend })
    }
}
