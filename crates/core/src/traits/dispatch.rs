//! Step execution seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lead::Lead;
use crate::step::AutomationStep;

/// What happened when a due step was handed to the outside world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Action executed; optional human-readable outcome for the audit trail
    Delivered { outcome: Option<String> },
    /// Action could not be executed; the step moves to `Failed`
    Failed { reason: String },
}

/// Campaign/notification dispatcher supplied by the host application
///
/// The engine never sends anything itself; it computes due times and hands
/// due steps to this trait. An `Err` from `dispatch` aborts the current
/// dispatch pass without touching the step, whereas
/// [`DispatchOutcome::Failed`] records a terminal failure.
#[async_trait]
pub trait StepDispatcher: Send + Sync {
    /// Execute one due step for a lead
    async fn dispatch(&self, lead: &Lead, step: &AutomationStep) -> Result<DispatchOutcome>;

    /// Dispatcher name for logging
    fn name(&self) -> &str;
}
