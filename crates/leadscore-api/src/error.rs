//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leadscore_domain::DomainError;
use leadscore_scoring::{ExportError, IngestError, PipelineError};
use leadscore_storage::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PreconditionFailed(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Invalid offer: {0}")]
    Validation(#[from] DomainError),

    #[error("Could not read leads file: {0}")]
    Ingest(#[from] IngestError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            missing @ PipelineError::PreconditionNotMet { .. } => ApiError::PreconditionFailed(
                format!("{missing}. Upload an offer and leads first."),
            ),
            PipelineError::Store(e) => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::PreconditionFailed(_) => (StatusCode::BAD_REQUEST, "precondition_failed"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Ingest(_) => (StatusCode::BAD_REQUEST, "invalid_csv"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "export_error"),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
