//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::format::LocaleCurrencyFormatter;

use super::types::{AguinaldoConfig, DisplayConfig, EngineMetadata, PolicyConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/aguinaldo/
/// ├── engine.yaml   # Engine metadata and legal reference
/// ├── policy.yaml   # Payment deadline
/// └── display.yaml  # Locale, currency formatting, preference storage
/// ```
///
/// # Example
///
/// ```no_run
/// use aguinaldo_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/aguinaldo")?;
/// println!("Loaded: {}", loader.engine().name);
/// # Ok::<(), aguinaldo_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AguinaldoConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing or contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let display_config = Self::load_yaml::<DisplayConfig>(&path.join("display.yaml"))?;

        debug!(
            dir = %path.display(),
            version = %metadata.version,
            locale = %display_config.locale,
            "Configuration loaded"
        );

        Ok(Self {
            config: AguinaldoConfig::new(metadata, policy, display_config),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AguinaldoConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AguinaldoConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the statutory policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the display configuration.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }

    /// Builds the currency formatter for the configured locale.
    pub fn currency_formatter(&self) -> LocaleCurrencyFormatter {
        LocaleCurrencyFormatter::from_config(self.display())
    }
}
