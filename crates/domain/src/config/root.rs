use serde::{Deserialize, Serialize};

use super::audit::AuditConfig;
use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Main configuration structure for Spirit DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Answer cache configuration (key namespace, sweep cadence)
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Audit log publishing
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. spirit-dns.toml in current directory
    /// 3. /etc/spirit-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("spirit-dns.toml").exists() {
            Self::from_file("spirit-dns.toml")?
        } else if std::path::Path::new("/etc/spirit-dns/config.toml").exists() {
            Self::from_file("/etc/spirit-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = json;
        }
        if let Some(secs) = overrides.sweep_interval_secs {
            self.cache.sweep_interval_secs = secs;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Sweep interval cannot be 0".to_string(),
            ));
        }

        if self.cache.scan_batch_size == 0 {
            return Err(ConfigError::Validation(
                "Scan batch size cannot be 0".to_string(),
            ));
        }

        if self.cache.url.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Validation(
                "Cache store url cannot be empty".to_string(),
            ));
        }

        if self.cache.key_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "Cache key prefix cannot be empty".to_string(),
            ));
        }

        if self.audit.enabled && self.audit.destination.is_empty() {
            return Err(ConfigError::Validation(
                "Audit destination cannot be empty when auditing is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
    pub sweep_interval_secs: Option<u64>,
}
