//! Workflow selection by trigger
//!
//! Selection is a trigger match against the catalog. When several
//! workflows declare the same trigger the tie-break is deterministic:
//! highest historical conversion rate first, then lowest id.

use lead_engine_config::WorkflowCatalog;
use lead_engine_core::{AutomationWorkflow, Error, Result, WorkflowTrigger};

/// Select the workflow to activate for a trigger
///
/// An unrecognized trigger is a configuration error surfaced as
/// [`Error::UnknownTrigger`], never silently defaulted.
pub fn select_workflow<'a>(
    catalog: &'a WorkflowCatalog,
    trigger: &WorkflowTrigger,
) -> Result<&'a AutomationWorkflow> {
    let mut matches = catalog.matching(trigger);
    if matches.is_empty() {
        return Err(Error::UnknownTrigger {
            trigger: trigger.label().to_string(),
        });
    }

    matches.sort_by(|a, b| {
        b.performance
            .conversion_rate
            .partial_cmp(&a.performance.conversion_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(matches[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_engine_core::{ActionKind, AutomationAction, WorkflowPerformance};

    fn workflow(id: &str, trigger: WorkflowTrigger, conversion_rate: f64) -> AutomationWorkflow {
        AutomationWorkflow {
            id: id.to_string(),
            name: id.to_string(),
            trigger,
            conditions: vec![],
            actions: vec![AutomationAction {
                kind: ActionKind::Email,
                delay_hours: 1,
                template: "t".to_string(),
                personalized: false,
            }],
            performance: WorkflowPerformance {
                conversion_rate,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_single_match() {
        let catalog = WorkflowCatalog::default();
        let wf = select_workflow(&catalog, &WorkflowTrigger::DemoCompleted).unwrap();
        assert_eq!(wf.id, "wf_demo_followup");
    }

    #[test]
    fn test_unknown_trigger() {
        let catalog = WorkflowCatalog::default();
        let err = select_workflow(&catalog, &WorkflowTrigger::Custom("webinar".to_string()));
        assert!(matches!(err, Err(Error::UnknownTrigger { .. })));
    }

    #[test]
    fn test_tie_break_by_conversion_rate() {
        let catalog = WorkflowCatalog {
            workflows: vec![
                workflow("wf_a", WorkflowTrigger::Qualified, 0.10),
                workflow("wf_b", WorkflowTrigger::Qualified, 0.30),
            ],
        };
        let wf = select_workflow(&catalog, &WorkflowTrigger::Qualified).unwrap();
        assert_eq!(wf.id, "wf_b");
    }

    #[test]
    fn test_tie_break_by_id_when_rates_equal() {
        let catalog = WorkflowCatalog {
            workflows: vec![
                workflow("wf_z", WorkflowTrigger::Qualified, 0.20),
                workflow("wf_a", WorkflowTrigger::Qualified, 0.20),
            ],
        };
        let wf = select_workflow(&catalog, &WorkflowTrigger::Qualified).unwrap();
        assert_eq!(wf.id, "wf_a");
    }
}
