//! Scoring and offer tunables

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Tunable thresholds for banding and automation
///
/// Category aggregation weights are fixed in
/// [`lead_engine_core::Category::weight`]; only the band boundaries and
/// offer parameters are tenant-tunable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Lower bound of the top band (immediate, high-priority handling)
    #[serde(default = "default_hot")]
    pub hot_threshold: u8,

    /// Lower bound of the qualified band; also the lead qualification cut
    #[serde(default = "default_qualified")]
    pub qualified_threshold: u8,

    /// Lower bound of the nurture band; below it leads are low priority
    #[serde(default = "default_nurture")]
    pub nurture_threshold: u8,

    /// Number of personalized offers generated per activation
    #[serde(default = "default_offer_count")]
    pub offer_count: usize,

    /// Days until a generated offer expires
    #[serde(default = "default_offer_validity")]
    pub offer_validity_days: u32,
}

fn default_hot() -> u8 {
    80
}

fn default_qualified() -> u8 {
    60
}

fn default_nurture() -> u8 {
    40
}

fn default_offer_count() -> usize {
    3
}

fn default_offer_validity() -> u32 {
    14
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hot_threshold: default_hot(),
            qualified_threshold: default_qualified(),
            nurture_threshold: default_nurture(),
            offer_count: default_offer_count(),
            offer_validity_days: default_offer_validity(),
        }
    }
}

impl ScoringConfig {
    /// Validate threshold ordering
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.nurture_threshold < self.qualified_threshold
            && self.qualified_threshold < self.hot_threshold)
        {
            return Err(ConfigError::InvalidValue {
                field: "scoring thresholds".to_string(),
                message: format!(
                    "must be strictly ordered nurture < qualified < hot, got {} / {} / {}",
                    self.nurture_threshold, self.qualified_threshold, self.hot_threshold
                ),
            });
        }
        if self.offer_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "offer_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
