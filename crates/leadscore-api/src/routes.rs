//! API route definitions

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, leads, offer, results, scoring},
    middleware::logging_middleware,
    state::AppState,
};

/// Largest accepted request body, in bytes
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/offer", post(offer::save_offer))
        .route("/api/leads/upload", post(leads::upload_leads))
        .route("/api/score", post(scoring::run_scoring))
        .route("/api/results", get(results::get_results))
        .route("/api/results/export", get(results::export_results))
}

/// Full application with middleware and state applied
pub fn app(state: AppState) -> Router {
    api_routes()
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
