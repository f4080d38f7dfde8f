//! Qualification score value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::Category;

/// One 0-100 score per qualification category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub budget: f64,
    pub authority: f64,
    pub need: f64,
    pub timeline: f64,
    pub fit: f64,
}

impl CategoryScores {
    /// Score for one category
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Budget => self.budget,
            Category::Authority => self.authority,
            Category::Need => self.need,
            Category::Timeline => self.timeline,
            Category::Fit => self.fit,
        }
    }

    /// Set the score for one category
    pub fn set(&mut self, category: Category, score: f64) {
        match category {
            Category::Budget => self.budget = score,
            Category::Authority => self.authority = score,
            Category::Need => self.need = score,
            Category::Timeline => self.timeline = score,
            Category::Fit => self.fit = score,
        }
    }

    /// Iterate over all five (category, score) pairs in aggregation order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Result of one qualification run
///
/// Produced once per run and immutable afterwards; attached to the lead as
/// qualification metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationResult {
    /// Overall score, 0-100
    pub overall: u8,
    /// Per-category breakdown
    pub categories: CategoryScores,
    /// Confidence in the score, 0.0-1.0
    pub confidence: f64,
    /// Qualitative recommendations for the sales team
    pub recommendations: Vec<String>,
    /// Concrete next-step actions
    pub next_steps: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
