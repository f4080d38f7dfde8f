//! Engine error types

use thiserror::Error;

use crate::step::StepStatus;

/// Result alias used across the engine crates
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the qualification and automation engine
///
/// All variants are recoverable by the caller (re-prompt the user, fix the
/// catalog configuration). None of them should abort the host application.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required questions have no answer
    #[error("qualification incomplete: missing answers for {missing:?}")]
    IncompleteQualification { missing: Vec<String> },

    /// An answer references a question id not present in the catalog
    #[error("unknown question: {question_id}")]
    UnknownQuestion { question_id: String },

    /// Answer value does not fit the question's type or allowed range
    ///
    /// Out-of-range values are rejected, never clamped, so a bad input can
    /// not silently corrupt a score.
    #[error("invalid answer for {question_id}: {reason}")]
    InvalidAnswerValue { question_id: String, reason: String },

    /// No catalog workflow is declared for the given trigger
    #[error("no workflow configured for trigger: {trigger}")]
    UnknownTrigger { trigger: String },

    /// Attempted transition out of a terminal step state
    #[error("invalid step transition for {step_id}: {from} -> {to}")]
    InvalidStateTransition {
        step_id: String,
        from: StepStatus,
        to: StepStatus,
    },

    /// Step id not present in the workflow run
    #[error("unknown step: {step_id}")]
    UnknownStep { step_id: String },

    /// Catalog or tunables failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Lead store failure reported by the host application
    #[error("lead store error: {0}")]
    Store(String),
}
