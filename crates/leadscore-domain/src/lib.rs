//! Domain entities for the lead scoring engine
//!
//! Offers, leads, classifier insights and the scored result records that
//! flow through the scoring pipeline. Nothing in this crate performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, DomainResult};
pub use value_objects::Intent;
