//! Lead scoring pipeline
//!
//! Given an offer and a batch of leads, produces one [`ScoredLead`] per lead
//! by adding a deterministic rule score to the points of an externally
//! classified buying intent. Classification failures never fail the batch:
//! the classifier degrades to a fixed fallback insight instead.
//!
//! [`ScoredLead`]: leadscore_domain::ScoredLead

pub mod classifier;
pub mod compose;
pub mod error;
pub mod export;
pub mod ingest;
pub mod pipeline;
pub mod prompt;
pub mod retry;
pub mod rules;

pub use classifier::{AttemptFailure, Classification, IntentClassifier, LlmIntentClassifier};
pub use compose::compose;
pub use error::{ExportError, IngestError, PipelineError};
pub use export::{export_csv, EXPORT_COLUMNS};
pub use ingest::parse_leads;
pub use pipeline::{RunSummary, ScoringPipeline};
pub use prompt::{build_prompt, parse_insight, ParseFailure};
pub use retry::RetryPolicy;
pub use rules::RuleBreakdown;
