//! API configuration module.
//!
//! Configuration is built from defaults overlaid with environment variables
//! prefixed `GOODBURGER_`:
//!
//! | Variable                  | Default                     |
//! |---------------------------|-----------------------------|
//! | `GOODBURGER_HOST`         | `0.0.0.0`                   |
//! | `GOODBURGER_PORT`         | `8080`                      |
//! | `GOODBURGER_LOG_FILTER`   | `info`                      |
//! | `GOODBURGER_PROBLEM_BASE` | `http://localhost/problems` |
//!
//! `RUST_LOG`, when set, takes precedence over `GOODBURGER_LOG_FILTER`.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "GOODBURGER";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Default tracing filter directive
    pub log_filter: String,

    /// Base URI of problem `type` links; the error code is appended
    pub problem_base: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an explicit variable map instead of the process
    /// environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let config: ApiConfig = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_filter", "info")?
            .set_default("problem_base", "http://localhost/problems")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.socket_addr()?;

        let base = self.problem_base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ConfigError::MissingRequired("GOODBURGER_PROBLEM_BASE".to_string()));
        }
        self.problem_base = base.to_string();

        Ok(self)
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue("GOODBURGER_HOST".to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: "info".to_string(),
            problem_base: "http://localhost/problems".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.problem_base, "http://localhost/problems");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_vars(vars(&[
            ("GOODBURGER_PORT", "9090"),
            ("GOODBURGER_HOST", "127.0.0.1"),
            ("GOODBURGER_PROBLEM_BASE", "https://burger.example/problems/"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.problem_base, "https://burger.example/problems");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port() {
        let result = ApiConfig::from_vars(vars(&[("GOODBURGER_PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_invalid_host() {
        let result = ApiConfig::from_vars(vars(&[("GOODBURGER_HOST", "somewhere")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
