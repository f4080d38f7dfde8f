//! Personalized offer types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Incentive flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    Discount,
    Bonus,
    Trial,
    Consultation,
    Custom,
}

impl OfferKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            OfferKind::Discount => "Discount",
            OfferKind::Bonus => "Bonus",
            OfferKind::Trial => "Trial",
            OfferKind::Consultation => "Consultation",
            OfferKind::Custom => "Custom",
        }
    }
}

/// A personalized incentive proposed to a lead during automation
///
/// Generated per lead/workflow pairing; not persisted beyond the automation
/// session unless the host application activates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedOffer {
    pub id: String,
    pub kind: OfferKind,
    pub title: String,
    pub description: String,
    /// Human-readable value, e.g. "20% off first year"
    pub value: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub expires_at: DateTime<Utc>,
    /// Estimated probability this offer converts the lead, 0.0-1.0
    pub conversion_probability: f64,
}
