//! Classifier prompt construction and response parsing

use leadscore_domain::{ClassifierInsight, Intent, Lead, Offer};
use serde::Deserialize;
use thiserror::Error;

/// Why a classifier response could not be turned into an insight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("Classifier returned an empty response")]
    Empty,

    #[error("Classifier response is not an intent object: {0}")]
    InvalidJson(String),
}

#[derive(Debug, Deserialize)]
struct RawInsight {
    intent: String,
    reasoning: String,
}

/// Build the classification prompt for one lead
pub fn build_prompt(offer: &Offer, lead: &Lead) -> String {
    format!(
        r#"Product/Offer Details:
- Name: {offer_name}
- Value Propositions: {value_props}
- Ideal Use Cases: {use_cases}

Prospect (Lead) Details:
- Name: {name}
- Role: {role}
- Company: {company}
- Industry: {industry}
- Location: {location}
- LinkedIn Bio: {bio}

Based on the product and prospect details, classify the buying intent of this prospect as "High", "Medium", or "Low".
Then, provide a 1-2 sentence explanation for your classification.

Format your response as a JSON object with two keys: "intent" and "reasoning".
Example: {{"intent": "High", "reasoning": "Fits ICP SaaS mid-market and role is a decision maker."}}"#,
        offer_name = offer.name,
        value_props = offer.value_props.join(", "),
        use_cases = offer.ideal_use_cases.join(", "),
        name = lead.name,
        role = lead.role,
        company = lead.company,
        industry = lead.industry,
        location = lead.location,
        bio = lead.linkedin_bio,
    )
}

/// Parse a classifier response into an insight
///
/// Markdown code fences around the JSON object are ignored. Both keys must
/// be present as strings; an intent outside High/Medium/Low is kept as
/// [`Intent::Unrecognized`] with zero points.
pub fn parse_insight(text: &str) -> Result<ClassifierInsight, ParseFailure> {
    let json = strip_fences(text);
    if json.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let raw: RawInsight =
        serde_json::from_str(json).map_err(|e| ParseFailure::InvalidJson(e.to_string()))?;

    Ok(ClassifierInsight::new(Intent::from(raw.intent), raw.reasoning))
}

fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_offer_and_lead() {
        let offer = Offer::new(
            "AI Outreach Automation",
            vec!["24/7 outreach".to_string(), "6x more meetings".to_string()],
            vec!["B2B SaaS mid-market".to_string()],
        );
        let lead = Lead {
            name: "Ava Patel".to_string(),
            role: "Head of Growth".to_string(),
            company: "FlowMetrics".to_string(),
            industry: "SaaS".to_string(),
            location: "Berlin".to_string(),
            linkedin_bio: "Scaling outbound".to_string(),
        };

        let prompt = build_prompt(&offer, &lead);

        assert!(prompt.contains("- Name: AI Outreach Automation"));
        assert!(prompt.contains("- Value Propositions: 24/7 outreach, 6x more meetings"));
        assert!(prompt.contains("- Ideal Use Cases: B2B SaaS mid-market"));
        assert!(prompt.contains("- Role: Head of Growth"));
        assert!(prompt.contains("- LinkedIn Bio: Scaling outbound"));
        assert!(prompt.contains(r#"two keys: "intent" and "reasoning""#));
        assert!(prompt.contains(r#"{"intent": "High", "reasoning":"#));
    }

    #[test]
    fn test_parse_plain_json() {
        let insight = parse_insight(r#"{"intent": "Medium", "reasoning": "Adjacent industry."}"#)
            .unwrap();
        assert_eq!(insight.intent, Intent::Medium);
        assert_eq!(insight.points, 30);
        assert_eq!(insight.reasoning, "Adjacent industry.");
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"intent\": \"High\", \"reasoning\": \"Decision maker.\"}\n```\n";
        let insight = parse_insight(text).unwrap();
        assert_eq!(insight.intent, Intent::High);
        assert_eq!(insight.points, 50);

        let bare_fence = "```\n{\"intent\": \"Low\", \"reasoning\": \"Student.\"}\n```";
        assert_eq!(parse_insight(bare_fence).unwrap().points, 10);
    }

    #[test]
    fn test_unrecognized_intent_passes_through() {
        let insight = parse_insight(r#"{"intent": "Unknown", "reasoning": "Not enough data."}"#)
            .unwrap();
        assert_eq!(insight.intent, Intent::Unrecognized("Unknown".to_string()));
        assert_eq!(insight.points, 0);
    }

    #[test]
    fn test_malformed_responses() {
        assert_eq!(parse_insight("   "), Err(ParseFailure::Empty));
        assert_eq!(parse_insight("```json\n```"), Err(ParseFailure::Empty));
        assert!(matches!(
            parse_insight("I think this lead is high intent."),
            Err(ParseFailure::InvalidJson(_))
        ));
        assert!(matches!(
            parse_insight(r#"{"intent": "High"}"#),
            Err(ParseFailure::InvalidJson(_))
        ));
        assert!(matches!(
            parse_insight(r#"{"intent": 3, "reasoning": "x"}"#),
            Err(ParseFailure::InvalidJson(_))
        ));
    }
}
