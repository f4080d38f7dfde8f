//! Qualification question catalog types
//!
//! Questions follow the BANT-style framework: five fixed categories, each
//! holding a handful of weighted questions of varying answer kinds.

use serde::{Deserialize, Serialize};

/// Qualification dimension (BANT-style, plus product fit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Budget,
    Authority,
    Need,
    Timeline,
    Fit,
}

impl Category {
    /// All five categories, in aggregation order
    pub const ALL: [Category; 5] = [
        Category::Budget,
        Category::Authority,
        Category::Need,
        Category::Timeline,
        Category::Fit,
    ];

    /// Fixed weight used when aggregating category scores into the overall
    /// score. Weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Budget => 0.25,
            Category::Authority => 0.20,
            Category::Need => 0.15,
            Category::Timeline => 0.20,
            Category::Fit => 0.20,
        }
    }

    /// Display name for UI and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Budget => "Budget",
            Category::Authority => "Authority",
            Category::Need => "Need",
            Category::Timeline => "Timeline",
            Category::Fit => "Fit",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Answer shape expected by a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free text; scored neutrally
    Text,
    /// One choice from the declared `options`, scored by position
    SingleSelect,
    /// 0-5 star rating
    Rating,
    /// Continuous 0-100 slider
    Slider,
    /// Yes/no
    Boolean,
}

/// Immutable catalog entry describing one qualification question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationQuestion {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,

    /// Ordered answer options; only meaningful for `SingleSelect`
    #[serde(default)]
    pub options: Vec<String>,

    /// Relative weight within the question's category (> 0)
    pub weight: f64,

    pub category: Category,

    /// Qualification can not finalize while a required question is
    /// unanswered
    #[serde(default)]
    pub required: bool,
}

impl QualificationQuestion {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        kind: QuestionKind,
        category: Category,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            options: Vec::new(),
            weight,
            category,
            required: false,
        }
    }

    /// Set select options (builder style)
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Mark the question as required (builder style)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
