//! Lead entity: one prospect row

use serde::{Deserialize, Serialize};

/// A prospect record to be scored.
///
/// Every field is free text. Absent fields deserialize to the empty string,
/// so scorers can lowercase and match without checking for missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub linkedin_bio: String,
}

impl Lead {
    /// All six fields in declaration order
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.name,
            &self.role,
            &self.company,
            &self.industry,
            &self.location,
            &self.linkedin_bio,
        ]
    }

    /// True when none of the six fields is empty
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|field| !field.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_lead() -> Lead {
        Lead {
            name: "Ava Patel".to_string(),
            role: "Head of Growth".to_string(),
            company: "FlowMetrics".to_string(),
            industry: "B2B SaaS".to_string(),
            location: "Berlin".to_string(),
            linkedin_bio: "Scaling outbound at FlowMetrics".to_string(),
        }
    }

    #[test]
    fn test_complete_lead() {
        assert!(full_lead().is_complete());
    }

    #[test]
    fn test_any_empty_field_is_incomplete() {
        for index in 0..6 {
            let mut lead = full_lead();
            match index {
                0 => lead.name.clear(),
                1 => lead.role.clear(),
                2 => lead.company.clear(),
                3 => lead.industry.clear(),
                4 => lead.location.clear(),
                _ => lead.linkedin_bio.clear(),
            }
            assert!(!lead.is_complete(), "field {index} cleared");
        }
    }

    #[test]
    fn test_absent_fields_become_empty_strings() {
        let lead: Lead = serde_json::from_str(r#"{"name": "Sam", "role": "CTO"}"#).unwrap();
        assert_eq!(lead.role, "CTO");
        assert_eq!(lead.industry, "");
        assert_eq!(lead.linkedin_bio, "");
    }
}
