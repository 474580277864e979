//! Lead scoring HTTP API
//!
//! Exposes offer intake, CSV lead upload, scoring runs and result retrieval
//! over the artifact store shared with the scoring pipeline.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use server::ApiServer;
pub use state::AppState;
