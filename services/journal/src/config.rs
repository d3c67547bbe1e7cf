//! Process configuration
//!
//! Read once from the environment at startup and handed to the state
//! constructor. Nothing else in the service reads the environment.

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_AGENT_ID: &str = "unknown";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "info,journal=debug,tower_http=debug";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifies which instance answered, shown on `/` and `/health`
    pub agent_id: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let agent_id = get("AGENT_ID").unwrap_or_else(|| DEFAULT_AGENT_ID.to_string());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            agent_id,
            listen_addr: SocketAddr::new(ip, port),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_id: DEFAULT_AGENT_ID.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.agent_id, "unknown");
    }

    #[test]
    fn test_reads_agent_and_address() {
        let config = Config::from_lookup(lookup(&[
            ("AGENT_ID", "agent-7"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.agent_id, "agent-7");
        assert_eq!(config.listen_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn test_empty_agent_id_falls_back() {
        let config = Config::from_lookup(lookup(&[("AGENT_ID", "")])).unwrap();
        assert_eq!(config.agent_id, DEFAULT_AGENT_ID);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn test_invalid_host() {
        let err = Config::from_lookup(lookup(&[("HOST", "not a host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }
}
