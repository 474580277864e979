//! Deterministic rule scoring
//!
//! Three independent, additive sub-scores with a combined range of 0..=50.
//! Matching is case-insensitive substring search.

use leadscore_domain::{Lead, Offer};

const DECISION_MAKER_KEYWORDS: [&str; 8] = [
    "head", "vp", "director", "manager", "founder", "ceo", "cto", "cfo",
];
const INFLUENCER_KEYWORDS: [&str; 2] = ["influencer", "specialist"];

pub const DECISION_MAKER_POINTS: u32 = 20;
pub const INFLUENCER_POINTS: u32 = 10;
pub const EXACT_INDUSTRY_POINTS: u32 = 20;
pub const ADJACENT_INDUSTRY_POINTS: u32 = 10;
pub const COMPLETENESS_POINTS: u32 = 10;

/// Maximum rule score
pub const MAX_RULE_SCORE: u32 = DECISION_MAKER_POINTS + EXACT_INDUSTRY_POINTS + COMPLETENESS_POINTS;

/// Per-rule contributions to a lead's rule score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleBreakdown {
    pub role: u32,
    pub industry: u32,
    pub completeness: u32,
}

impl RuleBreakdown {
    pub fn total(&self) -> u32 {
        self.role + self.industry + self.completeness
    }
}

/// Rule score of a lead, in `0..=50`
pub fn score(lead: &Lead, offer: &Offer) -> u32 {
    breakdown(lead, offer).total()
}

/// Rule score split by rule
///
/// The ideal industry is fixed to SaaS rather than derived from the offer.
pub fn breakdown(lead: &Lead, _offer: &Offer) -> RuleBreakdown {
    RuleBreakdown {
        role: role_points(&lead.role),
        industry: industry_points(&lead.industry),
        completeness: if lead.is_complete() {
            COMPLETENESS_POINTS
        } else {
            0
        },
    }
}

fn role_points(role: &str) -> u32 {
    let role = role.to_lowercase();
    if DECISION_MAKER_KEYWORDS.iter().any(|k| role.contains(k)) {
        DECISION_MAKER_POINTS
    } else if INFLUENCER_KEYWORDS.iter().any(|k| role.contains(k)) {
        INFLUENCER_POINTS
    } else {
        0
    }
}

fn industry_points(industry: &str) -> u32 {
    let industry = industry.to_lowercase();
    if industry.contains("saas") {
        EXACT_INDUSTRY_POINTS
    } else if industry.contains("tech") {
        ADJACENT_INDUSTRY_POINTS
    } else {
        0
    }
}
