//! Value objects shared across the scoring pipeline

use std::fmt;

use serde::{Deserialize, Serialize};

/// Buying-intent label assigned by the classifier.
///
/// The classifier is asked for one of `High`, `Medium` or `Low`. Anything
/// else it returns is kept verbatim in [`Intent::Unrecognized`] and is worth
/// zero classifier points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Intent {
    /// Classifier points contributed by this intent
    pub fn points(&self) -> u32 {
        match self {
            Intent::High => 50,
            Intent::Medium => 30,
            Intent::Low => 10,
            Intent::Unrecognized(_) => 0,
        }
    }

    /// Label as written in results and exports
    pub fn as_str(&self) -> &str {
        match self {
            Intent::High => "High",
            Intent::Medium => "Medium",
            Intent::Low => "Low",
            Intent::Unrecognized(raw) => raw,
        }
    }
}

// Matching is exact: "high" is not "High".
impl From<String> for Intent {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => Intent::High,
            "Medium" => Intent::Medium,
            "Low" => Intent::Low,
            _ => Intent::Unrecognized(value),
        }
    }
}

impl From<&str> for Intent {
    fn from(value: &str) -> Self {
        Intent::from(value.to_string())
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
