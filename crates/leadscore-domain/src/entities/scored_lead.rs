//! Final per-lead result record

use serde::{Deserialize, Serialize};

use crate::value_objects::Intent;

/// One row of a scoring run's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLead {
    pub name: String,
    pub role: String,
    pub company: String,
    pub intent: Intent,
    pub score: u32,
    pub reasoning: String,
}

/// Output of one scoring run, in input lead order
pub type ResultSet = Vec<ScoredLead>;
