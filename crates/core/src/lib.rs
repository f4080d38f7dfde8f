//! Core types and traits for the lead qualification engine
//!
//! This crate provides the foundational types used across the engine:
//! - Lead records and lifecycle status
//! - Qualification questions, answers, and score value objects
//! - Automation workflow, offer, and scheduled-step types
//! - Error types
//! - Collaborator traits (lead store, step dispatcher, confidence model)

pub mod answer;
pub mod error;
pub mod lead;
pub mod offer;
pub mod question;
pub mod score;
pub mod step;
pub mod traits;
pub mod workflow;

pub use answer::{AnswerSet, AnswerValue};
pub use error::{Error, Result};
pub use lead::{CommunicationRecord, DemoRecord, Lead, LeadStatus, Priority};
pub use offer::{OfferKind, PersonalizedOffer};
pub use question::{Category, QualificationQuestion, QuestionKind};
pub use score::{CategoryScores, QualificationResult};
pub use step::{AutomationStep, StepStatus};
pub use workflow::{
    ActionKind, AutomationAction, AutomationWorkflow, WorkflowPerformance, WorkflowTrigger,
};

pub use traits::{
    ConfidenceModel, CoverageConfidence, DispatchOutcome, LeadStore, StepDispatcher,
};
