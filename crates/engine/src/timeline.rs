//! Workflow activation and step timeline
//!
//! Activating a workflow for a lead expands its action list into scheduled
//! steps with absolute due times. The run holds step status only; nothing
//! here sends messages or sleeps. Steps are independently schedulable at
//! their due time; cancellation is the only cross-step control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lead_engine_core::{
    AutomationAction, AutomationStep, AutomationWorkflow, DispatchOutcome, Error, Lead, Result,
    StepDispatcher, StepStatus,
};

/// One activation of a workflow for one lead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: Uuid,
    pub lead_id: String,
    pub workflow_id: String,
    pub activated_at: DateTime<Utc>,
    /// Set by the first effective `cancel` call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Steps in declared action order; never reordered, never removed
    pub steps: Vec<AutomationStep>,
}

impl WorkflowRun {
    /// Expand a workflow's actions into pending steps
    pub fn activate(
        lead_id: impl Into<String>,
        workflow: &AutomationWorkflow,
        activated_at: DateTime<Utc>,
    ) -> Self {
        let steps = workflow
            .actions
            .iter()
            .cloned()
            .map(|action| AutomationStep::schedule(action, activated_at))
            .collect();

        Self {
            id: Uuid::new_v4(),
            lead_id: lead_id.into(),
            workflow_id: workflow.id.clone(),
            activated_at,
            cancelled_at: None,
            steps,
        }
    }

    fn step_mut(&mut self, step_id: Uuid) -> Result<&mut AutomationStep> {
        self.steps
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| Error::UnknownStep {
                step_id: step_id.to_string(),
            })
    }

    /// Record successful execution of a step
    pub fn complete_step(
        &mut self,
        step_id: Uuid,
        outcome: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<()> {
        self.step_mut(step_id)?
            .transition(StepStatus::Completed, outcome, at)
    }

    /// Record a dispatch failure; the step is terminal afterwards
    pub fn fail_step(&mut self, step_id: Uuid, reason: String, at: DateTime<Utc>) -> Result<()> {
        self.step_mut(step_id)?
            .transition(StepStatus::Failed, Some(reason), at)
    }

    /// Cancel the remaining workflow
    ///
    /// Transitions every pending step to `Skipped` atomically and returns
    /// how many were skipped. Idempotent: a second call finds no pending
    /// steps, changes nothing, and raises no error.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> usize {
        let mut skipped = 0;
        for step in &mut self.steps {
            if step.status == StepStatus::Pending {
                // Pending -> Skipped is always allowed
                let _ = step.transition(StepStatus::Skipped, None, at);
                skipped += 1;
            }
        }
        if skipped > 0 {
            if self.cancelled_at.is_none() {
                self.cancelled_at = Some(at);
            }
            tracing::debug!(run_id = %self.id, skipped, "workflow run cancelled");
        }
        skipped
    }

    /// Append a fresh step, e.g. a retry of a failed action
    ///
    /// The timeline is append-only: a failed step stays on record and its
    /// retry enters as a new pending step due `action.delay_hours` from
    /// `from`.
    pub fn append_step(&mut self, action: AutomationAction, from: DateTime<Utc>) -> Uuid {
        let step = AutomationStep::schedule(action, from);
        let id = step.id;
        self.steps.push(step);
        id
    }

    /// Pending steps due at `now`, in due-time order
    pub fn due_steps(&self, now: DateTime<Utc>) -> Vec<&AutomationStep> {
        let mut due: Vec<&AutomationStep> = self.steps.iter().filter(|s| s.is_due(now)).collect();
        due.sort_by_key(|s| s.due_at);
        due
    }

    /// Number of steps still pending
    pub fn pending_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Pending)
            .count()
    }

    /// Whether every step has reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.pending_count() == 0
    }

    /// Hand every due step to the dispatcher and record the outcomes
    ///
    /// Returns the number of steps dispatched. A dispatcher `Err` aborts
    /// the pass and leaves the current step pending; a
    /// [`DispatchOutcome::Failed`] marks the step failed and continues.
    pub async fn dispatch_due(
        &mut self,
        lead: &Lead,
        dispatcher: &dyn StepDispatcher,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let due_ids: Vec<Uuid> = self.due_steps(now).iter().map(|s| s.id).collect();
        let mut dispatched = 0;

        for step_id in due_ids {
            let step = self.step_mut(step_id)?.clone();
            match dispatcher.dispatch(lead, &step).await? {
                DispatchOutcome::Delivered { outcome } => {
                    self.complete_step(step_id, outcome, now)?;
                    tracing::info!(
                        run_id = %self.id,
                        step_id = %step_id,
                        dispatcher = dispatcher.name(),
                        "step dispatched"
                    );
                }
                DispatchOutcome::Failed { reason } => {
                    tracing::warn!(
                        run_id = %self.id,
                        step_id = %step_id,
                        dispatcher = dispatcher.name(),
                        reason = %reason,
                        "step dispatch failed"
                    );
                    self.fail_step(step_id, reason, now)?;
                }
            }
            dispatched += 1;
        }
        Ok(dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lead_engine_core::{ActionKind, WorkflowPerformance, WorkflowTrigger};

    fn workflow(delays: &[u32]) -> AutomationWorkflow {
        AutomationWorkflow {
            id: "wf_test".to_string(),
            name: "Test".to_string(),
            trigger: WorkflowTrigger::Qualified,
            conditions: vec![],
            actions: delays
                .iter()
                .map(|d| AutomationAction {
                    kind: ActionKind::Email,
                    delay_hours: *d,
                    template: format!("t{d}"),
                    personalized: false,
                })
                .collect(),
            performance: WorkflowPerformance::default(),
        }
    }

    fn lead() -> Lead {
        Lead::new("l1", "Asha", "asha@example.com")
    }

    struct ScriptedDispatcher {
        fail_template: Option<String>,
    }

    #[async_trait]
    impl StepDispatcher for ScriptedDispatcher {
        async fn dispatch(&self, _lead: &Lead, step: &AutomationStep) -> Result<DispatchOutcome> {
            if Some(&step.action.template) == self.fail_template.as_ref() {
                Ok(DispatchOutcome::Failed {
                    reason: "mailbox unavailable".to_string(),
                })
            } else {
                Ok(DispatchOutcome::Delivered {
                    outcome: Some("sent".to_string()),
                })
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_activation_due_times() {
        let t0 = Utc::now();
        let run = WorkflowRun::activate("l1", &workflow(&[2, 24, 72]), t0);

        assert_eq!(run.steps.len(), 3);
        let due: Vec<DateTime<Utc>> = run.steps.iter().map(|s| s.due_at).collect();
        assert_eq!(
            due,
            vec![
                t0 + chrono::Duration::hours(2),
                t0 + chrono::Duration::hours(24),
                t0 + chrono::Duration::hours(72),
            ]
        );
        assert!(run.steps.iter().all(|s| s.status == StepStatus::Pending));
    }

    #[test]
    fn test_cancel_skips_remaining_and_is_idempotent() {
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[2, 24, 72]), t0);
        let first_id = run.steps[0].id;
        run.complete_step(first_id, Some("sent".to_string()), t0)
            .unwrap();

        let skipped = run.cancel(t0 + chrono::Duration::hours(3));
        assert_eq!(skipped, 2);
        assert_eq!(run.steps[0].status, StepStatus::Completed);
        assert_eq!(run.steps[1].status, StepStatus::Skipped);
        assert_eq!(run.steps[2].status, StepStatus::Skipped);

        // Second cancel: no-op, no error
        let cancelled_at = run.cancelled_at;
        assert_eq!(run.cancel(t0 + chrono::Duration::hours(9)), 0);
        assert_eq!(run.cancelled_at, cancelled_at);
    }

    #[test]
    fn test_terminal_violation_surfaces() {
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[1]), t0);
        let id = run.steps[0].id;
        run.fail_step(id, "bounced".to_string(), t0).unwrap();

        let err = run.complete_step(id, None, t0);
        assert!(matches!(err, Err(Error::InvalidStateTransition { .. })));
    }

    #[test]
    fn test_unknown_step() {
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[1]), t0);
        let err = run.complete_step(Uuid::new_v4(), None, t0);
        assert!(matches!(err, Err(Error::UnknownStep { .. })));
    }

    #[test]
    fn test_due_steps_ordering() {
        let t0 = Utc::now();
        let run = WorkflowRun::activate("l1", &workflow(&[24, 2, 72]), t0);

        let due = run.due_steps(t0 + chrono::Duration::hours(30));
        assert_eq!(due.len(), 2);
        assert!(due[0].due_at <= due[1].due_at);
        assert_eq!(due[0].action.template, "t2");
    }

    #[test]
    fn test_append_step_for_retry() {
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[1]), t0);
        let failed_id = run.steps[0].id;
        run.fail_step(failed_id, "bounced".to_string(), t0).unwrap();

        let retry_at = t0 + chrono::Duration::hours(2);
        let retry_id = run.append_step(run.steps[0].action.clone(), retry_at);

        assert_eq!(run.steps.len(), 2);
        assert_ne!(retry_id, failed_id);
        assert_eq!(run.steps[1].status, StepStatus::Pending);
        // The failed step stays on record
        assert_eq!(run.steps[0].status, StepStatus::Failed);
    }

    #[tokio::test]
    async fn test_dispatch_due_completes_steps() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[1, 2, 48]), t0);
        let dispatcher = ScriptedDispatcher { fail_template: None };

        let dispatched = run
            .dispatch_due(&lead(), &dispatcher, t0 + chrono::Duration::hours(3))
            .await
            .unwrap();

        assert_eq!(dispatched, 2);
        assert_eq!(run.steps[0].status, StepStatus::Completed);
        assert_eq!(run.steps[1].status, StepStatus::Completed);
        assert_eq!(run.steps[2].status, StepStatus::Pending);
        assert_eq!(run.steps[0].outcome.as_deref(), Some("sent"));
    }

    #[tokio::test]
    async fn test_dispatch_due_records_failure() {
        let t0 = Utc::now();
        let mut run = WorkflowRun::activate("l1", &workflow(&[1, 2]), t0);
        let dispatcher = ScriptedDispatcher {
            fail_template: Some("t1".to_string()),
        };

        run.dispatch_due(&lead(), &dispatcher, t0 + chrono::Duration::hours(3))
            .await
            .unwrap();

        assert_eq!(run.steps[0].status, StepStatus::Failed);
        assert_eq!(run.steps[0].outcome.as_deref(), Some("mailbox unavailable"));
        assert_eq!(run.steps[1].status, StepStatus::Completed);
    }
}
