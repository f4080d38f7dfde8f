//! Automation workflow catalog types
//!
//! Workflows are read-only catalog entries: an ordered list of timed
//! outreach actions tied to a trigger, plus historical performance stats
//! used for tie-breaking when several workflows match.

use serde::{Deserialize, Serialize};

/// Condition that makes a workflow eligible for a lead
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowTrigger {
    /// Lead finished a product demo
    DemoCompleted,
    /// No reply to previous outreach
    NoResponse,
    /// Lead crossed the qualification threshold
    Qualified,
    /// Lead scored in the top band
    HighScore,
    /// Tenant-defined trigger
    Custom(String),
}

impl WorkflowTrigger {
    /// Display label for logs
    pub fn label(&self) -> &str {
        match self {
            WorkflowTrigger::DemoCompleted => "demo_completed",
            WorkflowTrigger::NoResponse => "no_response",
            WorkflowTrigger::Qualified => "qualified",
            WorkflowTrigger::HighScore => "high_score",
            WorkflowTrigger::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for WorkflowTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outreach channel for an automation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Email,
    Sms,
    Call,
    /// Internal task for a sales rep
    Task,
}

/// One timed outreach action within a workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationAction {
    pub kind: ActionKind,
    /// Delay from workflow activation, in hours
    pub delay_hours: u32,
    /// Content template handed to the dispatcher
    pub template: String,
    /// Whether the template is personalized per lead
    #[serde(default)]
    pub personalized: bool,
}

/// Historical performance of a workflow
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorkflowPerformance {
    pub leads_processed: u64,
    pub conversions: u64,
    /// Conversions / leads processed, 0.0-1.0
    pub conversion_rate: f64,
    pub avg_days_to_convert: f64,
}

/// Catalog entry: a trigger-bound, ordered sequence of timed actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationWorkflow {
    pub id: String,
    pub name: String,
    pub trigger: WorkflowTrigger,
    /// Free-text eligibility descriptors shown to operators
    #[serde(default)]
    pub conditions: Vec<String>,
    pub actions: Vec<AutomationAction>,
    #[serde(default)]
    pub performance: WorkflowPerformance,
}
