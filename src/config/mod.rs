//! Configuration loading for the settlement engine.
//!
//! The statutory rates are fixed by law and live next to the calculators.
//! What varies per deployment is loaded from YAML: the rule set metadata
//! reported with each calculation and the currency format of statements.
//!
//! # Example
//!
//! ```no_run
//! use verbas_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded rule set: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{EngineConfig, EngineMetadata};
