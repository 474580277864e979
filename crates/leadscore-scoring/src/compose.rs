//! Merges the rule score and classifier insight into a final record

use leadscore_domain::{ClassifierInsight, Lead, ScoredLead};

/// Final record for one lead: `score = rule_score + insight.points`, unclamped
pub fn compose(lead: &Lead, rule_score: u32, insight: ClassifierInsight) -> ScoredLead {
    ScoredLead {
        name: lead.name.clone(),
        role: lead.role.clone(),
        company: lead.company.clone(),
        intent: insight.intent,
        score: rule_score + insight.points,
        reasoning: insight.reasoning,
    }
}
