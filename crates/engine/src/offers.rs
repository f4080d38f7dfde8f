//! Personalized offer generation
//!
//! Offers come from a fixed template slate chosen by the lead's score
//! band; the conversion probability is a deterministic heuristic over the
//! lead's score, history, and the activating trigger. The probability
//! source is deliberately pluggable at the call site: any function with
//! the same [0,1] output contract can replace `conversion_probability`.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use lead_engine_config::ScoringConfig;
use lead_engine_core::{AutomationWorkflow, Lead, OfferKind, PersonalizedOffer, WorkflowTrigger};

use crate::recommend::ScoreBand;

struct OfferTemplate {
    kind: OfferKind,
    title: &'static str,
    description: &'static str,
    value: &'static str,
    conditions: &'static [&'static str],
}

fn templates_for_band(band: ScoreBand) -> &'static [OfferTemplate] {
    match band {
        ScoreBand::Hot => &[
            OfferTemplate {
                kind: OfferKind::Discount,
                title: "Annual plan discount",
                description: "Save on the first year of an annual subscription",
                value: "20% off first year",
                conditions: &["Annual commitment", "Activated within 14 days"],
            },
            OfferTemplate {
                kind: OfferKind::Consultation,
                title: "Onboarding strategy session",
                description: "1:1 session with a solutions engineer to plan the rollout",
                value: "90 minutes, free",
                conditions: &["Decision maker attends"],
            },
            OfferTemplate {
                kind: OfferKind::Trial,
                title: "Extended premium trial",
                description: "Full feature set, no card required",
                value: "30-day premium trial",
                conditions: &[],
            },
        ],
        ScoreBand::Qualified => &[
            OfferTemplate {
                kind: OfferKind::Trial,
                title: "Extended trial",
                description: "Twice the standard evaluation window",
                value: "30-day trial",
                conditions: &[],
            },
            OfferTemplate {
                kind: OfferKind::Consultation,
                title: "Setup consultation",
                description: "Guided configuration of your booking flows",
                value: "45 minutes, free",
                conditions: &[],
            },
            OfferTemplate {
                kind: OfferKind::Discount,
                title: "First-quarter discount",
                description: "Reduced price while you migrate",
                value: "10% off first quarter",
                conditions: &["Quarterly billing"],
            },
        ],
        ScoreBand::Nurture | ScoreBand::Cold => &[
            OfferTemplate {
                kind: OfferKind::Trial,
                title: "Standard trial",
                description: "Try the core booking features",
                value: "14-day trial",
                conditions: &[],
            },
            OfferTemplate {
                kind: OfferKind::Bonus,
                title: "Migration toolkit",
                description: "Import bookings and customers from your current tool",
                value: "Free data migration",
                conditions: &["On any paid plan"],
            },
            OfferTemplate {
                kind: OfferKind::Consultation,
                title: "Product walkthrough",
                description: "Short demo of the features matching your answers",
                value: "30 minutes, free",
                conditions: &[],
            },
        ],
    }
}

/// Deterministic conversion probability heuristic
///
/// Ladder over the lead's current score, adjusted by the activating
/// trigger, demo history, and offer flavor. Always clamped to [0, 1].
fn conversion_probability(lead: &Lead, trigger: &WorkflowTrigger, kind: OfferKind) -> f64 {
    let base: f64 = match lead.score {
        s if s >= 80 => 0.65,
        s if s >= 60 => 0.50,
        s if s >= 40 => 0.35,
        _ => 0.25,
    };

    let trigger_bonus = match trigger {
        WorkflowTrigger::DemoCompleted => 0.15,
        WorkflowTrigger::HighScore => 0.10,
        WorkflowTrigger::Qualified => 0.05,
        WorkflowTrigger::NoResponse => -0.05,
        WorkflowTrigger::Custom(_) => 0.0,
    };

    let history_bonus = if lead.has_completed_demo() { 0.05 } else { 0.0 };

    let kind_bonus = match kind {
        OfferKind::Discount => 0.05,
        OfferKind::Consultation => 0.03,
        OfferKind::Trial => 0.02,
        OfferKind::Bonus | OfferKind::Custom => 0.0,
    };

    (base + trigger_bonus + history_bonus + kind_bonus).clamp(0.0, 1.0)
}

/// Generate the offer slate for a lead and its selected workflow
///
/// Returns `config.offer_count` offers ordered by descending conversion
/// probability, each expiring `config.offer_validity_days` from `now`.
/// Today only the workflow's trigger feeds the heuristic; its conditions
/// and performance history are available for richer weighting later.
pub fn generate_offers(
    lead: &Lead,
    workflow: &AutomationWorkflow,
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> Vec<PersonalizedOffer> {
    let trigger = &workflow.trigger;
    let band = ScoreBand::classify(lead.score, config);
    let expires_at = now + Duration::days(i64::from(config.offer_validity_days));

    let mut offers: Vec<PersonalizedOffer> = templates_for_band(band)
        .iter()
        .take(config.offer_count)
        .map(|t| PersonalizedOffer {
            id: format!("offer_{}", Uuid::new_v4()),
            kind: t.kind,
            title: t.title.to_string(),
            description: t.description.to_string(),
            value: t.value.to_string(),
            conditions: t.conditions.iter().map(|c| c.to_string()).collect(),
            expires_at,
            conversion_probability: conversion_probability(lead, trigger, t.kind),
        })
        .collect();

    offers.sort_by(|a, b| {
        b.conversion_probability
            .partial_cmp(&a.conversion_probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    offers
}
