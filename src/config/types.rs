//! Configuration types for the settlement engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::formatting::FormatConfig;

/// Metadata about the rule set the engine applies.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the rule set.
    pub name: String,
    /// Jurisdiction code (e.g. "BR-CLT").
    pub jurisdiction: String,
    /// Version of the rule set, reported with every calculation.
    pub version: String,
    /// Date from which the statutory rules apply.
    pub effective_date: NaiveDate,
    /// URL to the legislation the rules come from.
    pub source_url: String,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    formatting: FormatConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, formatting: FormatConfig) -> Self {
        Self {
            metadata,
            formatting,
        }
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the currency format used for statements.
    pub fn formatting(&self) -> &FormatConfig {
        &self.formatting
    }
}
