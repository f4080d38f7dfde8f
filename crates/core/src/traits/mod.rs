//! Collaborator traits
//!
//! The engine itself is pure; everything that touches the outside world
//! (lead persistence, message delivery, confidence modelling) sits behind a
//! trait supplied by the host application.

mod confidence;
mod dispatch;
mod store;

pub use confidence::{ConfidenceModel, CoverageConfidence};
pub use dispatch::{DispatchOutcome, StepDispatcher};
pub use store::LeadStore;
