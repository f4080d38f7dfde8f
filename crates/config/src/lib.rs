//! Configuration for the lead qualification engine
//!
//! Catalogs ship with hardcoded seed defaults and can be replaced from
//! YAML/JSON files:
//! - Qualification question catalog
//! - Automation workflow catalog
//! - Scoring thresholds and offer tunables
//! - Aggregate bundle with a process-wide instance

pub mod bundle;
pub mod questions;
pub mod scoring;
pub mod workflows;

pub use bundle::{engine_config, init_engine_config, EngineConfig, EngineConfigManager};
pub use questions::QuestionCatalog;
pub use scoring::ScoringConfig;
pub use workflows::WorkflowCatalog;

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ConfigError> for lead_engine_core::Error {
    fn from(err: ConfigError) -> Self {
        lead_engine_core::Error::Config(err.to_string())
    }
}

pub(crate) fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

pub(crate) fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
