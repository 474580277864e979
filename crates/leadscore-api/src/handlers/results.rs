//! Result retrieval and CSV export

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use leadscore_domain::ResultSet;
use leadscore_scoring::export_csv;
use leadscore_storage::{ArtifactStore, StoreError};

use crate::{error::ApiResult, state::AppState, ApiError};

const NO_RESULTS: &str = "Results not found. Run the scoring process first.";

async fn load_results(state: &AppState) -> ApiResult<ResultSet> {
    state.store.get_results().await.map_err(|e| match e {
        StoreError::NotFound { .. } => ApiError::NotFound(NO_RESULTS.to_string()),
        other => ApiError::Store(other),
    })
}

/// Stored results as JSON
pub async fn get_results(State(state): State<AppState>) -> ApiResult<Json<ResultSet>> {
    Ok(Json(load_results(&state).await?))
}

/// Stored results as a CSV attachment
pub async fn export_results(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let csv = export_csv(&load_results(&state).await?)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"results.csv\"",
            ),
        ],
        csv,
    ))
}
