//! Scheduled automation steps and their state machine
//!
//! A step is one scheduled, stateful instance of a workflow action for a
//! specific lead. The timeline is an append-only audit trail: terminal
//! states are final, and a retry means appending a new step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::workflow::AutomationAction;

/// Step execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Waiting for its due time
    #[default]
    Pending,
    /// Dispatcher executed the action successfully
    Completed,
    /// Cancelled before execution (lead converted, opted out)
    Skipped,
    /// Dispatcher reported a failure; no in-place retry
    Failed,
}

impl StepStatus {
    /// Get allowed transitions from the current status
    pub fn allowed_transitions(&self) -> Vec<StepStatus> {
        match self {
            StepStatus::Pending => vec![
                StepStatus::Completed,
                StepStatus::Skipped,
                StepStatus::Failed,
            ],
            StepStatus::Completed | StepStatus::Skipped | StepStatus::Failed => vec![],
        }
    }

    /// Check if a transition to the target status is allowed
    pub fn can_transition_to(&self, target: StepStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    /// Whether this status is final
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepStatus::Pending)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Completed => "completed",
            StepStatus::Skipped => "skipped",
            StepStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// One scheduled instance of an [`AutomationAction`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationStep {
    pub id: Uuid,
    /// The catalog action this step instantiates
    pub action: AutomationAction,
    /// Absolute due time: activation time + the action's delay
    pub due_at: DateTime<Utc>,
    pub status: StepStatus,
    /// Dispatcher-reported outcome or failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    /// When the step left `Pending`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl AutomationStep {
    /// Schedule a new step from a catalog action
    pub fn schedule(action: AutomationAction, activated_at: DateTime<Utc>) -> Self {
        let due_at = activated_at + chrono::Duration::hours(i64::from(action.delay_hours));
        Self {
            id: Uuid::new_v4(),
            action,
            due_at,
            status: StepStatus::Pending,
            outcome: None,
            resolved_at: None,
        }
    }

    /// Whether the step is due for dispatch at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == StepStatus::Pending && self.due_at <= now
    }

    /// Move the step to a terminal status
    ///
    /// Transitions out of a terminal state raise
    /// [`Error::InvalidStateTransition`]; the audit trail never rewrites
    /// history.
    pub fn transition(
        &mut self,
        target: StepStatus,
        outcome: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(Error::InvalidStateTransition {
                step_id: self.id.to_string(),
                from: self.status,
                to: target,
            });
        }
        tracing::debug!(step_id = %self.id, from = %self.status, to = %target, "step transition");
        self.status = target;
        self.outcome = outcome;
        self.resolved_at = Some(at);
        Ok(())
    }
}
