//! Qualification question catalog
//!
//! Ships with a seed catalog for the booking-platform sales funnel; tenants
//! can replace it from a YAML/JSON file at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lead_engine_core::{Category, QualificationQuestion, QuestionKind};

use crate::ConfigError;

/// The full set of qualification questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCatalog {
    #[serde(default = "default_questions")]
    pub questions: Vec<QualificationQuestion>,
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self {
            questions: default_questions(),
        }
    }
}

impl QuestionCatalog {
    /// Seed catalog with defaults
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

    /// Look up a question by id
    pub fn get(&self, id: &str) -> Option<&QualificationQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions belonging to one category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&QualificationQuestion> {
        self.questions.iter().filter(|q| q.category == category).collect()
    }

    /// Questions that must be answered before qualification can finalize
    pub fn required(&self) -> impl Iterator<Item = &QualificationQuestion> {
        self.questions.iter().filter(|q| q.required)
    }

    /// Validate catalog consistency
    ///
    /// Checks: unique ids, positive weights, options declared exactly for
    /// single-select questions, and every category represented (the
    /// aggregate scorer needs all five).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for q in &self.questions {
            if q.weight <= 0.0 || !q.weight.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: format!("questions.{}.weight", q.id),
                    message: format!("must be a positive number, got {}", q.weight),
                });
            }
            match q.kind {
                QuestionKind::SingleSelect if q.options.len() < 2 => {
                    return Err(ConfigError::InvalidValue {
                        field: format!("questions.{}.options", q.id),
                        message: "single-select needs at least two options".to_string(),
                    });
                }
                QuestionKind::SingleSelect => {}
                _ if !q.options.is_empty() => {
                    return Err(ConfigError::InvalidValue {
                        field: format!("questions.{}.options", q.id),
                        message: "options are only valid for single-select".to_string(),
                    });
                }
                _ => {}
            }
            if self.questions.iter().filter(|o| o.id == q.id).count() > 1 {
                return Err(ConfigError::InvalidValue {
                    field: "questions".to_string(),
                    message: format!("duplicate question id: {}", q.id),
                });
            }
        }
        for category in Category::ALL {
            if self.by_category(category).is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "questions for category {category}"
                )));
            }
        }
        Ok(())
    }
}

fn default_questions() -> Vec<QualificationQuestion> {
    vec![
        QualificationQuestion::new(
            "budget_band",
            "What monthly budget do you have for a booking platform?",
            QuestionKind::SingleSelect,
            Category::Budget,
            3.0,
        )
        .with_options(vec![
            "Under $50/mo".to_string(),
            "$50-200/mo".to_string(),
            "$200-500/mo".to_string(),
            "Over $500/mo".to_string(),
        ])
        .required(),
        QualificationQuestion::new(
            "budget_approved",
            "Is budget for this already approved?",
            QuestionKind::Boolean,
            Category::Budget,
            2.0,
        ),
        QualificationQuestion::new(
            "decision_maker",
            "Are you the decision maker for this purchase?",
            QuestionKind::Boolean,
            Category::Authority,
            3.0,
        )
        .required(),
        QualificationQuestion::new(
            "stakeholders",
            "How many people are involved in the decision?",
            QuestionKind::SingleSelect,
            Category::Authority,
            1.0,
        )
        .with_options(vec![
            "4 or more".to_string(),
            "2-3".to_string(),
            "Just me".to_string(),
        ]),
        QualificationQuestion::new(
            "pain_level",
            "How painful is your current booking process?",
            QuestionKind::Rating,
            Category::Need,
            3.0,
        )
        .required(),
        QualificationQuestion::new(
            "current_tooling",
            "What do you use to manage bookings today?",
            QuestionKind::Text,
            Category::Need,
            1.0,
        ),
        QualificationQuestion::new(
            "go_live",
            "When do you want to go live?",
            QuestionKind::SingleSelect,
            Category::Timeline,
            3.0,
        )
        .with_options(vec![
            "No fixed date".to_string(),
            "Within 6 months".to_string(),
            "Within 3 months".to_string(),
            "Within 1 month".to_string(),
        ])
        .required(),
        QualificationQuestion::new(
            "urgency",
            "How urgent is replacing your current setup?",
            QuestionKind::Rating,
            Category::Timeline,
            1.0,
        ),
        QualificationQuestion::new(
            "volume_fit",
            "Where does your monthly booking volume sit on our supported range?",
            QuestionKind::Slider,
            Category::Fit,
            2.0,
        )
        .required(),
        QualificationQuestion::new(
            "multi_location",
            "Do you operate more than one location?",
            QuestionKind::Boolean,
            Category::Fit,
            1.0,
        ),
    ]
}
