//! Command-line front end for the lead scoring engine

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
