//! Startup configuration from the environment.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `ADMIN_PASSWORD` | yes, non-empty | |
//! | `PROJECTS_API_ADDR` | no | `0.0.0.0:8080` |
//!
//! `RUST_LOG` is read separately by [`crate::logging`].

use std::net::SocketAddr;

use thiserror::Error;

pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
pub const LISTEN_ADDR: &str = "PROJECTS_API_ADDR";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required env var ADMIN_PASSWORD is not set")]
    MissingAdminPassword,

    #[error("invalid PROJECTS_API_ADDR '{value}': {reason}")]
    InvalidAddr { value: String, reason: String },
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub admin_password: String,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source. An empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let admin_password = var(ADMIN_PASSWORD).ok_or(ConfigError::MissingAdminPassword)?;

        let raw_addr = var(LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let addr = raw_addr.parse::<SocketAddr>().map_err(|e| ConfigError::InvalidAddr {
            value: raw_addr.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { admin_password, addr })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("admin_password", &"<redacted>")
            .field("addr", &self.addr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn password_is_required() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap_err(), ConfigError::MissingAdminPassword);
    }

    #[test]
    fn empty_password_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[(ADMIN_PASSWORD, "")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingAdminPassword);
    }

    #[test]
    fn defaults_to_port_8080() {
        let config = Config::from_lookup(lookup(&[(ADMIN_PASSWORD, "pw")])).unwrap();
        assert_eq!(config.admin_password, "pw");
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn listen_address_can_be_overridden() {
        let config = Config::from_lookup(lookup(&[
            (ADMIN_PASSWORD, "pw"),
            (LISTEN_ADDR, "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
    }

    #[test]
    fn bad_listen_address_is_reported() {
        let err = Config::from_lookup(lookup(&[(ADMIN_PASSWORD, "pw"), (LISTEN_ADDR, "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "nowhere"));
        assert!(err.to_string().contains(LISTEN_ADDR));
    }

    #[test]
    fn debug_output_hides_password() {
        let config = Config::from_lookup(lookup(&[(ADMIN_PASSWORD, "hunter2")])).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
