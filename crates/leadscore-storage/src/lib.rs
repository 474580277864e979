//! Artifact storage for the lead scoring pipeline
//!
//! Offers, lead batches and result sets live in three fixed slots. Every
//! write replaces the previous value of its slot.

pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod slot;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use slot::Slot;
pub use store::ArtifactStore;
