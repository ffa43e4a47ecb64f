//! Configuration structures.
//!
//! Configuration is loaded from an optional JSON file, then overridden by
//! environment variables.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::types::{Error, Result};
use crate::validation::ZipcodeRange;

/// Environment variable overriding `server.listen_addr`.
pub const ENV_LISTEN_ADDR: &str = "FULFILLMENT_LISTEN_ADDR";
/// Environment variable selecting the log format (`json` or `text`).
pub const ENV_LOG_FORMAT: &str = "FULFILLMENT_LOG_FORMAT";

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// HTTP transport configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Address validation rule configuration.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration from a JSON file. Sections missing from the file
    /// keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            Error::config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the current values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup(ENV_LISTEN_ADDR) {
            self.server.listen_addr = addr;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        self
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        if self.http.max_body_bytes == 0 {
            return Err(Error::config("http.max_body_bytes must be positive"));
        }
        self.validation.zipcode_range()?;
        Ok(())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP bind address.
    pub listen_addr: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.listen_addr.parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4567".to_string(),
        }
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,

    /// Requests running longer than this are answered with 408 by the
    /// transport layer.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Time allowed for in-flight requests to finish after shutdown is
    /// requested.
    #[serde(with = "humantime_serde")]
    pub shutdown_grace: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Accepted zipcode range (inclusive on both ends).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub zipcode_min: u32,
    pub zipcode_max: u32,
}

impl ValidationConfig {
    pub fn zipcode_range(&self) -> Result<ZipcodeRange> {
        ZipcodeRange::new(self.zipcode_min, self.zipcode_max)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            zipcode_min: ZipcodeRange::DEFAULT_MIN,
            zipcode_max: ZipcodeRange::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.listen_addr, "127.0.0.1:4567");
        assert_eq!(config.validation.zipcode_min, 20170);
        assert_eq!(config.validation.zipcode_max, 20179);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server": {{"listen_addr": "0.0.0.0:8080"}}, "http": {{"request_timeout": "5s"}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.http.max_body_bytes, 1024 * 1024);
        assert_eq!(config.validation.zipcode_min, 20170);
    }

    #[test]
    fn unparseable_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file("/nonexistent/fulfillment.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let env: HashMap<&str, &str> = [
            (ENV_LISTEN_ADDR, "127.0.0.1:9999"),
            (ENV_LOG_FORMAT, "JSON"),
        ]
        .into_iter()
        .collect();

        let config =
            Config::default().with_overrides_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.server.listen_addr, "127.0.0.1:9999");
        assert!(config.observability.json_logs);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut config = Config::default();
        config.validation.zipcode_min = 20179;
        config.validation.zipcode_max = 20170;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn bad_listen_addr_is_rejected() {
        let mut config = Config::default();
        config.server.listen_addr = "localhost".to_string();
        assert!(matches!(config.validate(), Err(Error::AddrParse(_))));
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let mut config = Config::default();
        config.http.max_body_bytes = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
