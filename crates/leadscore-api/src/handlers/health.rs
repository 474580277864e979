//! Liveness endpoints

use axum::{extract::State, Json};

use crate::{models::HealthResponse, state::AppState};

pub const ROOT_MESSAGE: &str = "Scoring Engine is running!";

/// Root banner
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
    })
}
