//! Scoring runs

use axum::{extract::State, Json};

use crate::{error::ApiResult, models::ScoreResponse, state::AppState};

/// Score the stored leads against the stored offer
pub async fn run_scoring(State(state): State<AppState>) -> ApiResult<Json<ScoreResponse>> {
    let summary = state.pipeline.run_stored().await?;

    Ok(Json(ScoreResponse {
        message: "Scoring complete. Results are ready.".to_string(),
        scored: summary.scored,
        fallbacks: summary.fallbacks,
        elapsed_ms: summary.elapsed.as_millis() as u64,
    }))
}
