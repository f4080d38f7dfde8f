//! Category and aggregate scoring
//!
//! Raw answer values are normalized onto a 0-100 scale per question, then
//! weighted-averaged within each category. The overall score is the fixed
//! dot product over the five category scores.

use lead_engine_config::QuestionCatalog;
use lead_engine_core::{
    AnswerSet, AnswerValue, Category, CategoryScores, Error, QualificationQuestion, QuestionKind,
    Result,
};

/// Validate every submitted answer against the catalog
///
/// Rejects answers for unknown question ids and values that do not fit the
/// question's type or range. Runs before any scoring so a bad value can
/// never corrupt a score.
pub fn validate_answers(catalog: &QuestionCatalog, answers: &AnswerSet) -> Result<()> {
    for (question_id, value) in answers.iter() {
        let question = catalog.get(question_id).ok_or_else(|| Error::UnknownQuestion {
            question_id: question_id.clone(),
        })?;
        value.validate_for(question)?;
    }
    Ok(())
}

/// Ensure every required question has an answer
///
/// Returns [`Error::IncompleteQualification`] listing the missing ids in
/// catalog order.
pub fn check_required(catalog: &QuestionCatalog, answers: &AnswerSet) -> Result<()> {
    let missing: Vec<String> = catalog
        .required()
        .filter(|q| !answers.contains(&q.id))
        .map(|q| q.id.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::IncompleteQualification { missing })
    }
}

/// Normalize one answered question onto 0-100
///
/// Assumes the answer already passed [`validate_answers`]; shapes without a
/// scoring rule fall back to the neutral 50.
fn raw_score(question: &QualificationQuestion, value: &AnswerValue) -> f64 {
    match question.kind {
        QuestionKind::SingleSelect => match value {
            AnswerValue::Text(choice) => {
                let denom = question.options.len().saturating_sub(1).max(1) as f64;
                question
                    .options
                    .iter()
                    .position(|o| o == choice)
                    .map(|idx| idx as f64 / denom * 100.0)
                    .unwrap_or(50.0)
            }
            _ => 50.0,
        },
        // Numeric kinds read through numeric_value so integer/float payload
        // ambiguity from untagged deserialization cannot skew the score
        QuestionKind::Rating => value
            .numeric_value()
            .map(|v| v / 5.0 * 100.0)
            .unwrap_or(50.0),
        QuestionKind::Slider => value.numeric_value().unwrap_or(50.0),
        QuestionKind::Boolean => match value {
            AnswerValue::Flag(true) => 100.0,
            AnswerValue::Flag(false) => 0.0,
            _ => 50.0,
        },
        // Free text has no scoring rule: neutral
        QuestionKind::Text => 50.0,
    }
}

/// Score one category: weighted average over its answered questions
///
/// Questions without an answer contribute nothing (neither score nor
/// weight); a category with no answers at all scores 0.
pub fn score_category(
    answers: &AnswerSet,
    questions_in_category: &[&QualificationQuestion],
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for question in questions_in_category {
        if let Some(value) = answers.get(&question.id) {
            weighted_sum += raw_score(question, value) * question.weight;
            weight_total += question.weight;
        }
    }

    if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    }
}

/// Score all five categories from a catalog and answer set
pub fn score_categories(catalog: &QuestionCatalog, answers: &AnswerSet) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for category in Category::ALL {
        let questions = catalog.by_category(category);
        scores.set(category, score_category(answers, &questions));
    }
    scores
}

/// Aggregate category scores into the overall score
///
/// Fixed category weights (budget 0.25, authority 0.20, need 0.15,
/// timeline 0.20, fit 0.20), rounded to the nearest integer. Always
/// defined: an unanswered category has already scored 0.
pub fn score_overall(categories: &CategoryScores) -> u8 {
    let total: f64 = categories
        .iter()
        .map(|(category, score)| score * category.weight())
        .sum();
    total.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::default()
    }

    fn full_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.insert("budget_band", AnswerValue::Text("Over $500/mo".to_string()));
        answers.insert("budget_approved", AnswerValue::Flag(true));
        answers.insert("decision_maker", AnswerValue::Flag(true));
        answers.insert("stakeholders", AnswerValue::Text("Just me".to_string()));
        answers.insert("pain_level", AnswerValue::Rating(5));
        answers.insert("current_tooling", AnswerValue::Text("spreadsheets".to_string()));
        answers.insert("go_live", AnswerValue::Text("Within 1 month".to_string()));
        answers.insert("urgency", AnswerValue::Rating(5));
        answers.insert("volume_fit", AnswerValue::Slider(100.0));
        answers.insert("multi_location", AnswerValue::Flag(true));
        answers
    }

    #[test]
    fn test_validate_unknown_question() {
        let mut answers = AnswerSet::new();
        answers.insert("no_such_question", AnswerValue::Flag(true));
        assert!(matches!(
            validate_answers(&catalog(), &answers),
            Err(Error::UnknownQuestion { .. })
        ));
    }

    #[test]
    fn test_validate_out_of_range() {
        let mut answers = AnswerSet::new();
        answers.insert("pain_level", AnswerValue::Rating(9));
        assert!(matches!(
            validate_answers(&catalog(), &answers),
            Err(Error::InvalidAnswerValue { .. })
        ));
    }

    #[test]
    fn test_check_required_reports_missing() {
        let err = check_required(&catalog(), &AnswerSet::new());
        match err {
            Err(Error::IncompleteQualification { missing }) => {
                assert!(missing.contains(&"budget_band".to_string()));
                assert!(missing.contains(&"volume_fit".to_string()));
            }
            other => panic!("expected IncompleteQualification, got {other:?}"),
        }
    }

    #[test]
    fn test_single_select_position_scoring() {
        let q = QualificationQuestion::new(
            "q",
            "band",
            QuestionKind::SingleSelect,
            Category::Budget,
            1.0,
        )
        .with_options(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        assert_eq!(raw_score(&q, &AnswerValue::Text("a".to_string())), 0.0);
        assert_eq!(raw_score(&q, &AnswerValue::Text("b".to_string())), 50.0);
        assert_eq!(raw_score(&q, &AnswerValue::Text("c".to_string())), 100.0);
    }

    #[test]
    fn test_rating_and_boolean_scoring() {
        let rating =
            QualificationQuestion::new("r", "r", QuestionKind::Rating, Category::Need, 1.0);
        assert_eq!(raw_score(&rating, &AnswerValue::Rating(0)), 0.0);
        assert_eq!(raw_score(&rating, &AnswerValue::Rating(3)), 60.0);
        assert_eq!(raw_score(&rating, &AnswerValue::Rating(5)), 100.0);

        let flag =
            QualificationQuestion::new("b", "b", QuestionKind::Boolean, Category::Authority, 1.0);
        assert_eq!(raw_score(&flag, &AnswerValue::Flag(true)), 100.0);
        assert_eq!(raw_score(&flag, &AnswerValue::Flag(false)), 0.0);
    }

    #[test]
    fn test_slider_scores_integer_payload() {
        let q = QualificationQuestion::new("s", "fit", QuestionKind::Slider, Category::Fit, 1.0);
        // A whole-number JSON answer lands in the Rating variant
        assert_eq!(raw_score(&q, &AnswerValue::Rating(62)), 62.0);
        assert_eq!(raw_score(&q, &AnswerValue::Slider(62.0)), 62.0);
    }

    #[test]
    fn test_text_scores_neutral() {
        let q = QualificationQuestion::new("t", "t", QuestionKind::Text, Category::Need, 1.0);
        assert_eq!(raw_score(&q, &AnswerValue::Text("anything".to_string())), 50.0);
    }

    #[test]
    fn test_unanswered_category_scores_zero() {
        let scores = score_categories(&catalog(), &AnswerSet::new());
        for (_, score) in scores.iter() {
            assert_eq!(score, 0.0);
        }
        assert_eq!(score_overall(&scores), 0);
    }

    #[test]
    fn test_weighted_average_skips_unanswered() {
        let cat = catalog();
        let questions = cat.by_category(Category::Budget);

        // Only the select (weight 3) answered at the top option
        let mut answers = AnswerSet::new();
        answers.insert("budget_band", AnswerValue::Text("Over $500/mo".to_string()));
        assert_eq!(score_category(&answers, &questions), 100.0);

        // Adding the unapproved-budget flag (weight 2) drags it down
        answers.insert("budget_approved", AnswerValue::Flag(false));
        let score = score_category(&answers, &questions);
        assert!((score - 60.0).abs() < 1e-9); // (100*3 + 0*2) / 5
    }

    #[test]
    fn test_monotonicity_in_single_answer() {
        let cat = catalog();
        let mut answers = full_answers();
        answers.insert("pain_level", AnswerValue::Rating(2));
        let low = score_categories(&cat, &answers).need;

        answers.insert("pain_level", AnswerValue::Rating(4));
        let high = score_categories(&cat, &answers).need;

        assert!(high >= low);
    }

    #[test]
    fn test_overall_hand_computed_dot_product() {
        let scores = CategoryScores {
            budget: 100.0,
            authority: 100.0,
            need: 0.0,
            timeline: 0.0,
            fit: 0.0,
        };
        // 100*0.25 + 100*0.20 = 45
        assert_eq!(score_overall(&scores), 45);
    }

    #[test]
    fn test_overall_rounding() {
        let scores = CategoryScores {
            budget: 50.0, // 12.5
            authority: 0.0,
            need: 0.0,
            timeline: 0.0,
            fit: 0.0,
        };
        assert_eq!(score_overall(&scores), 13);
    }

    #[test]
    fn test_full_answers_deterministic_and_in_range() {
        let cat = catalog();
        let answers = full_answers();
        assert!(validate_answers(&cat, &answers).is_ok());
        assert!(check_required(&cat, &answers).is_ok());

        let first = score_overall(&score_categories(&cat, &answers));
        let second = score_overall(&score_categories(&cat, &answers));
        assert_eq!(first, second);
        assert!(first <= 100);
    }
}
