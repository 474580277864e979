//! Concrete provider implementations

pub mod google;

pub use google::GoogleProvider;
