//! Qualification engine facade
//!
//! Combines the catalogs, tunables, and confidence model into the two
//! operations the host application calls: qualify a lead from its answers,
//! and activate an automation workflow for a trigger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lead_engine_config::{EngineConfig, QuestionCatalog, ScoringConfig, WorkflowCatalog};
use lead_engine_core::{
    AnswerSet, AutomationWorkflow, ConfidenceModel, CoverageConfidence, Error, Lead, LeadStore,
    PersonalizedOffer, QualificationResult, Result, WorkflowTrigger,
};

use crate::offers::generate_offers;
use crate::recommend::ScoreBand;
use crate::scoring::{check_required, score_categories, score_overall, validate_answers};
use crate::selector::select_workflow;
use crate::timeline::WorkflowRun;

/// Payload handed to the host when a workflow is activated for a lead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activation {
    pub workflow: AutomationWorkflow,
    pub offers: Vec<PersonalizedOffer>,
    /// Snapshot of the tunables the offers and timeline were built with
    pub settings: ScoringConfig,
    pub run: WorkflowRun,
}

/// Lead qualification and conversion-automation engine
///
/// Pure and synchronous for scoring; the only async surface is the
/// lead-store convenience path. Construct once and share.
pub struct QualificationEngine {
    questions: QuestionCatalog,
    workflows: WorkflowCatalog,
    scoring: ScoringConfig,
    confidence: Box<dyn ConfidenceModel>,
}

impl QualificationEngine {
    /// Build an engine from a configuration bundle
    pub fn new(config: EngineConfig) -> Self {
        Self {
            questions: config.questions,
            workflows: config.workflows,
            scoring: config.scoring,
            confidence: Box::new(CoverageConfidence),
        }
    }

    /// Replace the confidence model (builder style)
    pub fn with_confidence_model(mut self, model: Box<dyn ConfidenceModel>) -> Self {
        self.confidence = model;
        self
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Run one qualification pass over a completed answer set
    ///
    /// Validates the answers, refuses to finalize while required questions
    /// are unanswered, then produces the immutable result object.
    pub fn qualify(&self, lead: &Lead, answers: &AnswerSet) -> Result<QualificationResult> {
        if let Err(e) = validate_answers(&self.questions, answers) {
            tracing::warn!(lead_id = %lead.id, error = %e, "answer validation failed");
            return Err(e);
        }
        check_required(&self.questions, answers)?;

        let categories = score_categories(&self.questions, answers);
        let overall = score_overall(&categories);
        let band = ScoreBand::classify(overall, &self.scoring);
        let confidence = self
            .confidence
            .confidence(answers, &self.questions.questions);

        tracing::info!(lead_id = %lead.id, overall, band = %band, "lead qualified");
        tracing::debug!(
            budget = categories.budget,
            authority = categories.authority,
            need = categories.need,
            timeline = categories.timeline,
            fit = categories.fit,
            "category scores"
        );

        Ok(QualificationResult {
            overall,
            categories,
            confidence,
            recommendations: band.recommendations(),
            next_steps: band.next_steps(),
            generated_at: Utc::now(),
        })
    }

    /// Fetch a lead, qualify it, and persist the updated record
    pub async fn qualify_via_store(
        &self,
        store: &dyn LeadStore,
        lead_id: &str,
        answers: &AnswerSet,
    ) -> Result<Lead> {
        let mut lead = store
            .get(lead_id)
            .await?
            .ok_or_else(|| Error::Store(format!("lead not found: {lead_id}")))?;

        let result = self.qualify(&lead, answers)?;
        lead.apply_qualification(
            &result,
            self.scoring.qualified_threshold,
            self.scoring.hot_threshold,
        );
        store.put(lead.clone()).await?;
        Ok(lead)
    }

    /// Activate the automation workflow matching a trigger for a lead
    ///
    /// Selects the workflow, generates the personalized offer slate, and
    /// expands the action list into a pending step timeline. Execution of
    /// the steps is the host dispatcher's job.
    pub fn activate(
        &self,
        lead: &Lead,
        trigger: &WorkflowTrigger,
        now: DateTime<Utc>,
    ) -> Result<Activation> {
        let workflow = select_workflow(&self.workflows, trigger)?.clone();
        let offers = generate_offers(lead, &workflow, &self.scoring, now);
        let run = WorkflowRun::activate(lead.id.clone(), &workflow, now);

        tracing::info!(
            lead_id = %lead.id,
            workflow_id = %workflow.id,
            trigger = %trigger,
            steps = run.steps.len(),
            offers = offers.len(),
            "automation activated"
        );

        Ok(Activation {
            workflow,
            offers,
            settings: self.scoring,
            run,
        })
    }
}

impl Default for QualificationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_engine_core::{AnswerValue, LeadStatus, Priority};
    use memstore::InMemoryLeadStore;

    // Minimal in-memory store for exercising the async path
    mod memstore {
        use std::collections::HashMap;
        use std::sync::Mutex;

        use async_trait::async_trait;
        use lead_engine_core::{Lead, LeadStore, Result};

        #[derive(Default)]
        pub struct InMemoryLeadStore {
            leads: Mutex<HashMap<String, Lead>>,
        }

        impl InMemoryLeadStore {
            pub fn with_lead(lead: Lead) -> Self {
                let store = Self::default();
                store.leads.lock().unwrap().insert(lead.id.clone(), lead);
                store
            }
        }

        #[async_trait]
        impl LeadStore for InMemoryLeadStore {
            async fn get(&self, id: &str) -> Result<Option<Lead>> {
                Ok(self.leads.lock().unwrap().get(id).cloned())
            }

            async fn put(&self, lead: Lead) -> Result<()> {
                self.leads.lock().unwrap().insert(lead.id.clone(), lead);
                Ok(())
            }
        }
    }

    fn strong_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.insert("budget_band", AnswerValue::Text("Over $500/mo".to_string()));
        answers.insert("budget_approved", AnswerValue::Flag(true));
        answers.insert("decision_maker", AnswerValue::Flag(true));
        answers.insert("pain_level", AnswerValue::Rating(5));
        answers.insert("go_live", AnswerValue::Text("Within 1 month".to_string()));
        answers.insert("volume_fit", AnswerValue::Slider(90.0));
        answers
    }

    fn weak_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.insert("budget_band", AnswerValue::Text("Under $50/mo".to_string()));
        answers.insert("decision_maker", AnswerValue::Flag(false));
        answers.insert("pain_level", AnswerValue::Rating(1));
        answers.insert("go_live", AnswerValue::Text("No fixed date".to_string()));
        answers.insert("volume_fit", AnswerValue::Slider(10.0));
        answers
    }

    #[test]
    fn test_qualify_strong_lead() {
        let engine = QualificationEngine::default();
        let lead = Lead::new("l1", "Asha", "asha@example.com");

        let result = engine.qualify(&lead, &strong_answers()).unwrap();
        assert!(result.overall >= 80);
        assert!((0.0..=1.0).contains(&result.confidence));
        assert!(!result.recommendations.is_empty());
        assert!(!result.next_steps.is_empty());
    }

    #[test]
    fn test_qualify_is_deterministic() {
        let engine = QualificationEngine::default();
        let lead = Lead::new("l1", "Asha", "asha@example.com");
        let answers = strong_answers();

        let a = engine.qualify(&lead, &answers).unwrap();
        let b = engine.qualify(&lead, &answers).unwrap();
        assert_eq!(a.overall, b.overall);
        assert_eq!(a.categories, b.categories);
    }

    #[test]
    fn test_qualify_rejects_incomplete() {
        let engine = QualificationEngine::default();
        let lead = Lead::new("l1", "Asha", "asha@example.com");

        let mut partial = AnswerSet::new();
        partial.insert("budget_band", AnswerValue::Text("Over $500/mo".to_string()));
        let err = engine.qualify(&lead, &partial);
        assert!(matches!(err, Err(Error::IncompleteQualification { .. })));
    }

    #[tokio::test]
    async fn test_qualify_via_store_updates_lead() {
        let engine = QualificationEngine::default();
        let store = InMemoryLeadStore::with_lead(Lead::new("l1", "Asha", "asha@example.com"));

        let updated = engine
            .qualify_via_store(&store, "l1", &strong_answers())
            .await
            .unwrap();

        assert_eq!(updated.status, LeadStatus::Qualified);
        assert_eq!(updated.priority, Priority::High);
        assert!(updated.qualification.is_some());

        let persisted = store.get("l1").await.unwrap().unwrap();
        assert_eq!(persisted.score, updated.score);
    }

    #[tokio::test]
    async fn test_qualify_via_store_weak_lead_stays_new() {
        let engine = QualificationEngine::default();
        let store = InMemoryLeadStore::with_lead(Lead::new("l2", "Ben", "ben@example.com"));

        let updated = engine
            .qualify_via_store(&store, "l2", &weak_answers())
            .await
            .unwrap();
        assert_eq!(updated.status, LeadStatus::New);
    }

    #[tokio::test]
    async fn test_qualify_via_store_missing_lead() {
        let engine = QualificationEngine::default();
        let store = InMemoryLeadStore::default();
        let err = engine
            .qualify_via_store(&store, "ghost", &strong_answers())
            .await;
        assert!(matches!(err, Err(Error::Store(_))));
    }

    #[test]
    fn test_activation_payload() {
        let engine = QualificationEngine::default();
        let mut lead = Lead::new("l1", "Asha", "asha@example.com");
        lead.score = 85;

        let now = Utc::now();
        let activation = engine
            .activate(&lead, &WorkflowTrigger::HighScore, now)
            .unwrap();

        assert_eq!(activation.workflow.id, "wf_high_value_nurture");
        assert_eq!(activation.offers.len(), 3);
        assert_eq!(activation.run.steps.len(), activation.workflow.actions.len());
        assert_eq!(activation.run.lead_id, "l1");
        assert_eq!(activation.settings.offer_count, 3);
        assert!(activation.run.pending_count() > 0);
    }

    #[test]
    fn test_activation_unknown_trigger() {
        let engine = QualificationEngine::default();
        let lead = Lead::new("l1", "Asha", "asha@example.com");
        let err = engine.activate(
            &lead,
            &WorkflowTrigger::Custom("webinar".to_string()),
            Utc::now(),
        );
        assert!(matches!(err, Err(Error::UnknownTrigger { .. })));
    }
}
