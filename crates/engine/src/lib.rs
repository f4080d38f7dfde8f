//! Lead qualification scoring and conversion-automation engine
//!
//! Pure, synchronous decision logic for a multi-tenant booking platform's
//! sales funnel:
//! - Category and aggregate scoring of questionnaire answers
//! - Threshold-band recommendations and next steps
//! - Trigger-based workflow selection
//! - Personalized offer generation
//! - Delay-based step timeline with an append-only audit trail
//!
//! # Data flow
//!
//! ```text
//! Lead + AnswerSet → scoring → ScoreBand → QualificationResult
//! Lead + WorkflowTrigger → selector → offers + WorkflowRun → Activation
//! ```
//!
//! Persistence and message delivery stay behind the
//! [`lead_engine_core::LeadStore`] and [`lead_engine_core::StepDispatcher`]
//! traits; the engine never sleeps, sends, or retries on its own.

pub mod engine;
pub mod offers;
pub mod recommend;
pub mod scoring;
pub mod selector;
pub mod timeline;

pub use engine::{Activation, QualificationEngine};
pub use offers::generate_offers;
pub use recommend::ScoreBand;
pub use scoring::{
    check_required, score_categories, score_category, score_overall, validate_answers,
};
pub use selector::select_workflow;
pub use timeline::WorkflowRun;
