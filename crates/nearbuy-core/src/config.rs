use crate::error::{NearbuyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Nearbuy
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub catalog_url: ConfigValue<String>,
    pub timeout_secs: ConfigValue<u64>,
    pub port: ConfigValue<u16>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            catalog_url: ConfigValue::new(
                "http://localhost:8080".to_string(),
                ConfigSource::Default,
            ),
            timeout_secs: ConfigValue::new(10, ConfigSource::Default),
            port: ConfigValue::new(3001, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| NearbuyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| NearbuyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(catalog_url) = file_config.catalog_url {
            self.catalog_url.update(catalog_url, ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::File);
        }

        if let Some(port) = file_config.port {
            self.port.update(port, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // NEARBUY_CATALOG_URL
        if let Ok(catalog_url) = env::var("NEARBUY_CATALOG_URL") {
            self.catalog_url.update(catalog_url, ConfigSource::Environment);
        }

        // NEARBUY_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("NEARBUY_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => self.timeout_secs.update(timeout, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NEARBUY_TIMEOUT_SECS value '{}': expected integer seconds",
                    timeout_str
                ),
            }
        }

        // NEARBUY_PORT
        if let Ok(port_str) = env::var("NEARBUY_PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => self.port.update(port, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NEARBUY_PORT value '{}': expected integer port number",
                    port_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(catalog_url) = overrides.catalog_url {
            self.catalog_url.update(catalog_url, ConfigSource::Cli);
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::Cli);
        }

        if let Some(port) = overrides.port {
            self.port.update(port, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "catalog_url".to_string(),
            (self.catalog_url.value.clone(), self.catalog_url.source),
        );

        map.insert(
            "timeout_secs".to_string(),
            (self.timeout_secs.value.to_string(), self.timeout_secs.source),
        );

        map.insert("port".to_string(), (self.port.value.to_string(), self.port.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    catalog_url: Option<String>,
    timeout_secs: Option<u64>,
    port: Option<u16>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub catalog_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub port: Option<u16>,
}
