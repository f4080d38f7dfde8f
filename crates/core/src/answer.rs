//! Answer values and validation
//!
//! An [`AnswerSet`] is built up while the user walks the questionnaire and
//! is treated as immutable once submitted for scoring; a re-qualification
//! supersedes it with a fresh set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::question::{QualificationQuestion, QuestionKind};

/// A single answer; the variant must fit the question's kind, with the
/// numeric variants interchangeable for `Rating` and `Slider` questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Yes/no answer for `Boolean` questions
    Flag(bool),
    /// 0-5 star value for `Rating` questions
    Rating(u8),
    /// 0-100 value for `Slider` questions
    Slider(f64),
    /// Free text for `Text`, or the chosen option for `SingleSelect`
    Text(String),
}

impl AnswerValue {
    /// Numeric view spanning the `Rating` and `Slider` variants
    ///
    /// Untagged JSON cannot tell an integer slider value from a rating
    /// (`62` parses as `Rating(62)`), so numeric questions accept either
    /// variant and validation ranges against the question kind instead.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            AnswerValue::Rating(v) => Some(f64::from(*v)),
            AnswerValue::Slider(v) => Some(*v),
            AnswerValue::Flag(_) | AnswerValue::Text(_) => None,
        }
    }

    /// Validate this value against the question it answers
    ///
    /// Type mismatches and out-of-range values are rejected outright so a
    /// bad input can never leak into a score.
    pub fn validate_for(&self, question: &QualificationQuestion) -> Result<()> {
        let mismatch = |expected: &str| Error::InvalidAnswerValue {
            question_id: question.id.clone(),
            reason: format!("expected {expected}, got {self:?}"),
        };

        match question.kind {
            QuestionKind::Text => match self {
                AnswerValue::Text(_) => Ok(()),
                _ => Err(mismatch("free text")),
            },
            QuestionKind::SingleSelect => match self {
                AnswerValue::Text(choice) => {
                    if question.options.iter().any(|o| o == choice) {
                        Ok(())
                    } else {
                        Err(Error::InvalidAnswerValue {
                            question_id: question.id.clone(),
                            reason: format!("'{choice}' is not one of the declared options"),
                        })
                    }
                }
                _ => Err(mismatch("one of the declared options")),
            },
            QuestionKind::Rating => match self.numeric_value() {
                Some(v) if v.fract() == 0.0 && (0.0..=5.0).contains(&v) => Ok(()),
                Some(v) => Err(Error::InvalidAnswerValue {
                    question_id: question.id.clone(),
                    reason: format!("rating {v} not a whole number in 0-5"),
                }),
                None => Err(mismatch("a 0-5 rating")),
            },
            QuestionKind::Slider => match self.numeric_value() {
                Some(v) if v.is_finite() && (0.0..=100.0).contains(&v) => Ok(()),
                Some(v) => Err(Error::InvalidAnswerValue {
                    question_id: question.id.clone(),
                    reason: format!("slider value {v} outside 0-100"),
                }),
                None => Err(mismatch("a 0-100 slider value")),
            },
            QuestionKind::Boolean => match self {
                AnswerValue::Flag(_) => Ok(()),
                _ => Err(mismatch("a yes/no answer")),
            },
        }
    }
}

/// Completed answers keyed by question id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer while the questionnaire is in progress
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(question_id.into(), value);
    }

    /// Answer for a question, if present
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over (question id, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.answers.iter()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
