//! Aggregate engine configuration
//!
//! Bundles the question catalog, workflow catalog, and scoring tunables,
//! with a process-wide instance for hosts that configure once at startup.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, QuestionCatalog, ScoringConfig, WorkflowCatalog};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub questions: QuestionCatalog,
    #[serde(default)]
    pub workflows: WorkflowCatalog,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = crate::read_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = crate::read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.questions.validate()?;
        self.workflows.validate()?;
        self.scoring.validate()?;
        Ok(())
    }
}

/// Engine configuration manager with runtime replacement support
pub struct EngineConfigManager {
    config: Arc<RwLock<EngineConfig>>,
}

impl EngineConfigManager {
    /// Create a manager holding the seed configuration
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(EngineConfig::default())),
        }
    }

    /// Create a manager holding the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Load from file, by extension (.yaml/.yml, otherwise JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let config = if path_str.ends_with(".yaml") || path_str.ends_with(".yml") {
            EngineConfig::from_yaml_file(&path)?
        } else {
            EngineConfig::from_json_file(&path)?
        };
        Ok(Self::with_config(config))
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> EngineConfig {
        self.config.read().clone()
    }

    /// Replace the configuration
    pub fn update(&self, config: EngineConfig) {
        *self.config.write() = config;
    }

    pub fn questions(&self) -> QuestionCatalog {
        self.config.read().questions.clone()
    }

    pub fn workflows(&self) -> WorkflowCatalog {
        self.config.read().workflows.clone()
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.config.read().scoring
    }
}

impl Default for EngineConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global engine configuration instance
static ENGINE_CONFIG: once_cell::sync::Lazy<EngineConfigManager> =
    once_cell::sync::Lazy::new(EngineConfigManager::new);

/// Get the global engine configuration
pub fn engine_config() -> &'static EngineConfigManager {
    &ENGINE_CONFIG
}

/// Initialize the global engine configuration from a file
pub fn init_engine_config(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let manager = EngineConfigManager::from_file(&path)?;
    ENGINE_CONFIG.update(manager.get());
    tracing::info!(path = %path.as_ref().display(), "engine configuration loaded");
    Ok(())
}
