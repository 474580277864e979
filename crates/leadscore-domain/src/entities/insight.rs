//! Classifier insight: the external intent signal for one lead

use serde::{Deserialize, Serialize};

use crate::value_objects::Intent;

/// Reasoning attached to the fallback insight
pub const FALLBACK_REASONING: &str =
    "AI analysis failed or could not determine intent after multiple retries.";

/// Intent classification for one lead in one scoring run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierInsight {
    pub intent: Intent,
    pub reasoning: String,
    pub points: u32,
}

impl ClassifierInsight {
    /// Build an insight, deriving points from the intent
    pub fn new(intent: Intent, reasoning: impl Into<String>) -> Self {
        let points = intent.points();
        Self {
            intent,
            reasoning: reasoning.into(),
            points,
        }
    }

    /// Insight used when the classifier could not produce one
    pub fn fallback() -> Self {
        Self {
            intent: Intent::Low,
            reasoning: FALLBACK_REASONING.to_string(),
            points: 10,
        }
    }
}
