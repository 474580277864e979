//! Offer entity: the product profile leads are scored against

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Seller's product profile used as scoring context.
///
/// Loaded once per scoring run and never mutated during it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub value_props: Vec<String>,
    #[serde(default)]
    pub ideal_use_cases: Vec<String>,
}

impl Offer {
    /// Create a new offer
    pub fn new(
        name: impl Into<String>,
        value_props: Vec<String>,
        ideal_use_cases: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_props,
            ideal_use_cases,
        }
    }

    /// Reject offers that cannot give the classifier any context
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError {
                field: "name".to_string(),
                reason: "offer name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let offer: Offer = serde_json::from_str(r#"{"name": "AI Outreach"}"#).unwrap();
        assert_eq!(offer.name, "AI Outreach");
        assert!(offer.value_props.is_empty());
        assert!(offer.ideal_use_cases.is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let offer = Offer::new("  ", vec![], vec![]);
        assert!(matches!(
            offer.validate(),
            Err(DomainError::ValidationError { ref field, .. }) if field == "name"
        ));
        assert!(Offer::new("Pipeline Pro", vec![], vec![]).validate().is_ok());
    }
}
