use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of named artifacts the pipeline reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Offer,
    Leads,
    Results,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Offer, Slot::Leads, Slot::Results];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Offer => "offer",
            Slot::Leads => "leads",
            Slot::Results => "results",
        }
    }

    /// File name used by file-backed stores
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
