//! Score banding and recommendations
//!
//! Four non-overlapping, exhaustive bands map the overall score to
//! qualitative recommendations and concrete next steps.

use serde::{Deserialize, Serialize};

use lead_engine_config::ScoringConfig;

/// Priority band derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Top band: immediate, high-priority handling
    Hot,
    /// Qualified lead worth prompt, direct follow-up
    Qualified,
    /// Worth keeping warm with educational content
    Nurture,
    /// Low priority, long-term campaign only
    Cold,
}

impl ScoreBand {
    /// Classify an overall score against the configured thresholds
    pub fn classify(overall: u8, config: &ScoringConfig) -> Self {
        if overall >= config.hot_threshold {
            ScoreBand::Hot
        } else if overall >= config.qualified_threshold {
            ScoreBand::Qualified
        } else if overall >= config.nurture_threshold {
            ScoreBand::Nurture
        } else {
            ScoreBand::Cold
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScoreBand::Hot => "Hot",
            ScoreBand::Qualified => "Qualified",
            ScoreBand::Nurture => "Nurture",
            ScoreBand::Cold => "Cold",
        }
    }

    /// Qualitative recommendations for the sales team
    pub fn recommendations(&self) -> Vec<String> {
        let items: &[&str] = match self {
            ScoreBand::Hot => &[
                "Schedule a product demo immediately",
                "Send the enterprise proposal",
                "Assign a senior sales representative",
            ],
            ScoreBand::Qualified => &[
                "Follow up within 24 hours",
                "Send relevant case studies",
                "Schedule a discovery call",
            ],
            ScoreBand::Nurture => &[
                "Add to the nurture track",
                "Share educational content",
                "Send pricing information",
            ],
            ScoreBand::Cold => &[
                "Add to the long-term nurture campaign",
                "Send general product information",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Concrete next-step actions
    pub fn next_steps(&self) -> Vec<String> {
        let items: &[&str] = match self {
            ScoreBand::Hot => &[
                "Book a demo within 48 hours",
                "Prepare an ROI-focused proposal",
                "Set up an executive meeting",
            ],
            ScoreBand::Qualified => &[
                "Call within 24 hours",
                "Email two matching case studies",
                "Book a discovery call this week",
            ],
            ScoreBand::Nurture => &[
                "Enroll in the educational drip sequence",
                "Send the pricing overview",
                "Follow up in one week",
            ],
            ScoreBand::Cold => &[
                "Add to the monthly newsletter",
                "Re-evaluate in 30 days",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
