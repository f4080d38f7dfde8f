//! Confidence modelling seam

use crate::answer::AnswerSet;
use crate::question::QualificationQuestion;

/// Produces the confidence value attached to a qualification result
///
/// The reference behavior derived confidence from an unspecified source;
/// here it is an explicit plug point. Implementations must return a value
/// in [0.0, 1.0] and be deterministic for a given input.
pub trait ConfidenceModel: Send + Sync {
    fn confidence(&self, answers: &AnswerSet, questions: &[QualificationQuestion]) -> f64;
}

/// Default model: confidence grows with answered weight coverage
///
/// Maps coverage (answered weight / total weight) linearly into
/// [0.5, 0.95] so a thin answer set is still reported as usable but
/// visibly less trustworthy than a complete one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageConfidence;

impl ConfidenceModel for CoverageConfidence {
    fn confidence(&self, answers: &AnswerSet, questions: &[QualificationQuestion]) -> f64 {
        let total: f64 = questions.iter().map(|q| q.weight).sum();
        if total <= 0.0 {
            return 0.5;
        }
        let answered: f64 = questions
            .iter()
            .filter(|q| answers.contains(&q.id))
            .map(|q| q.weight)
            .sum();
        let coverage = (answered / total).clamp(0.0, 1.0);
        0.5 + 0.45 * coverage
    }
}
