//! Domain entities

pub mod insight;
pub mod lead;
pub mod offer;
pub mod scored_lead;

pub use insight::{ClassifierInsight, FALLBACK_REASONING};
pub use lead::Lead;
pub use offer::Offer;
pub use scored_lead::{ResultSet, ScoredLead};
