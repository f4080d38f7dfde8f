//! Lead record and lifecycle types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::score::QualificationResult;

/// Lead lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Freshly captured, not yet worked
    #[default]
    New,
    /// At least one outreach attempt made
    Contacted,
    /// Passed the qualification threshold
    Qualified,
    /// Demo booked
    DemoScheduled,
    /// Became a paying tenant
    Converted,
    /// Closed without conversion
    Lost,
}

impl LeadStatus {
    /// Display name for logs and exports
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::DemoScheduled => "Demo Scheduled",
            LeadStatus::Converted => "Converted",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Working priority assigned to a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Logged outreach touchpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationRecord {
    pub id: String,
    /// Channel label (email, sms, call)
    pub channel: String,
    pub summary: String,
    pub at: DateTime<Utc>,
}

/// Logged product demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoRecord {
    pub id: String,
    pub scheduled_at: DateTime<Utc>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A prospective tenant tracked through the conversion funnel
///
/// Owned by the host application's lead store. The engine only writes
/// `score`, `status`, `priority` and the attached qualification metadata;
/// the rest of the lifecycle is out of its hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Current qualification score (0-100)
    #[serde(default)]
    pub score: u8,

    #[serde(default)]
    pub status: LeadStatus,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub communications: Vec<CommunicationRecord>,

    #[serde(default)]
    pub demos: Vec<DemoRecord>,

    /// Result of the most recent qualification run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<QualificationResult>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Create a minimal lead record
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            company: None,
            position: None,
            score: 0,
            status: LeadStatus::New,
            priority: Priority::default(),
            tags: Vec::new(),
            communications: Vec::new(),
            demos: Vec::new(),
            qualification: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the company (builder style)
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the position (builder style)
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Whether the lead has at least one completed demo on record
    pub fn has_completed_demo(&self) -> bool {
        self.demos.iter().any(|d| d.completed)
    }

    /// Write a qualification result back onto the lead
    ///
    /// Sets `score`, flips `status` to `Qualified` when the overall score
    /// meets `qualified_threshold` (back to `New` otherwise), derives
    /// `priority` from the same thresholds the score bands use, and
    /// attaches the result as metadata.
    pub fn apply_qualification(
        &mut self,
        result: &QualificationResult,
        qualified_threshold: u8,
        hot_threshold: u8,
    ) {
        self.score = result.overall;
        self.status = if result.overall >= qualified_threshold {
            LeadStatus::Qualified
        } else {
            LeadStatus::New
        };
        self.priority = if result.overall >= hot_threshold {
            Priority::High
        } else if result.overall >= qualified_threshold {
            Priority::Medium
        } else {
            Priority::Low
        };
        self.updated_at = result.generated_at;
        self.qualification = Some(result.clone());
    }
}
