//! Automation workflow catalog
//!
//! Three seed workflows cover the standard funnel moments: demo follow-up,
//! high-value nurture, and re-engagement after silence. Selection by
//! trigger lives in the engine crate; this module only owns the data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lead_engine_core::{
    ActionKind, AutomationAction, AutomationWorkflow, WorkflowPerformance, WorkflowTrigger,
};

use crate::ConfigError;

/// The full set of automation workflows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    #[serde(default = "default_workflows")]
    pub workflows: Vec<AutomationWorkflow>,
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self {
            workflows: default_workflows(),
        }
    }
}

impl WorkflowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let catalog: Self = crate::read_yaml(path)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let catalog: Self = crate::read_json(path)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up a workflow by id
    pub fn get(&self, id: &str) -> Option<&AutomationWorkflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// All workflows declared for a trigger, in catalog order
    pub fn matching(&self, trigger: &WorkflowTrigger) -> Vec<&AutomationWorkflow> {
        self.workflows.iter().filter(|w| &w.trigger == trigger).collect()
    }

    /// Validate catalog consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        for w in &self.workflows {
            if w.actions.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("workflows.{}.actions", w.id),
                    message: "workflow needs at least one action".to_string(),
                });
            }
            if !(0.0..=1.0).contains(&w.performance.conversion_rate) {
                return Err(ConfigError::InvalidValue {
                    field: format!("workflows.{}.performance.conversion_rate", w.id),
                    message: "must be within 0.0-1.0".to_string(),
                });
            }
            if self.workflows.iter().filter(|o| o.id == w.id).count() > 1 {
                return Err(ConfigError::InvalidValue {
                    field: "workflows".to_string(),
                    message: format!("duplicate workflow id: {}", w.id),
                });
            }
        }
        Ok(())
    }
}

fn email(delay_hours: u32, template: &str, personalized: bool) -> AutomationAction {
    AutomationAction {
        kind: ActionKind::Email,
        delay_hours,
        template: template.to_string(),
        personalized,
    }
}

fn default_workflows() -> Vec<AutomationWorkflow> {
    vec![
        AutomationWorkflow {
            id: "wf_demo_followup".to_string(),
            name: "Demo Follow-up".to_string(),
            trigger: WorkflowTrigger::DemoCompleted,
            conditions: vec!["Lead attended a full product demo".to_string()],
            actions: vec![
                email(2, "demo_thanks", true),
                email(24, "demo_recap_and_pricing", true),
                AutomationAction {
                    kind: ActionKind::Call,
                    delay_hours: 72,
                    template: "demo_decision_call".to_string(),
                    personalized: true,
                },
            ],
            performance: WorkflowPerformance {
                leads_processed: 412,
                conversions: 137,
                conversion_rate: 0.33,
                avg_days_to_convert: 9.5,
            },
        },
        AutomationWorkflow {
            id: "wf_high_value_nurture".to_string(),
            name: "High-Value Nurture".to_string(),
            trigger: WorkflowTrigger::HighScore,
            conditions: vec![
                "Qualification score of 80 or above".to_string(),
                "No demo scheduled yet".to_string(),
            ],
            actions: vec![
                email(1, "priority_welcome", true),
                AutomationAction {
                    kind: ActionKind::Task,
                    delay_hours: 4,
                    template: "assign_senior_rep".to_string(),
                    personalized: false,
                },
                email(48, "enterprise_case_study", true),
            ],
            performance: WorkflowPerformance {
                leads_processed: 188,
                conversions: 79,
                conversion_rate: 0.42,
                avg_days_to_convert: 6.0,
            },
        },
        AutomationWorkflow {
            id: "wf_reengagement".to_string(),
            name: "Re-engagement".to_string(),
            trigger: WorkflowTrigger::NoResponse,
            conditions: vec!["No reply to outreach for 14 days".to_string()],
            actions: vec![
                email(0, "checking_in", true),
                email(96, "new_features_digest", false),
                AutomationAction {
                    kind: ActionKind::Sms,
                    delay_hours: 240,
                    template: "last_touch_sms".to_string(),
                    personalized: true,
                },
            ],
            performance: WorkflowPerformance {
                leads_processed: 1043,
                conversions: 94,
                conversion_rate: 0.09,
                avg_days_to_convert: 21.0,
            },
        },
    ]
}
