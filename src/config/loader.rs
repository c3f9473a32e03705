//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::formatting::FormatConfig;

use super::types::{EngineConfig, EngineMetadata};

/// Directory the engine reads its configuration from by default.
pub const DEFAULT_CONFIG_DIR: &str = "./config/clt";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── engine.yaml      # Rule set metadata
/// └── formatting.yaml  # Currency symbol and separators
/// ```
///
/// # Example
///
/// ```no_run
/// use verbas_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt")?;
/// println!("Version: {}", loader.engine().version);
/// println!("Currency: {}", loader.formatting().currency_symbol);
/// # Ok::<(), verbas_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let formatting = Self::load_yaml::<FormatConfig>(&path.join("formatting.yaml"))?;

        info!(
            name = %metadata.name,
            version = %metadata.version,
            path = %path.display(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, formatting),
        })
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the currency format used for statements.
    pub fn formatting(&self) -> &FormatConfig {
        self.config.formatting()
    }
}
