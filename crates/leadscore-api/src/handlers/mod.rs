//! API route handlers

pub mod health;
pub mod leads;
pub mod offer;
pub mod results;
pub mod scoring;
