//! CSV lead upload

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use axum::Json;
use leadscore_scoring::parse_leads;
use leadscore_storage::ArtifactStore;
use tracing::info;

use crate::{error::ApiResult, models::MessageResponse, state::AppState, ApiError};

/// Multipart field carrying the CSV file
pub const LEADS_FIELD: &str = "leadsFile";

const NO_FILE: &str = "No file uploaded.";

/// Parse the uploaded CSV and replace the stored leads
pub async fn upload_leads(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let mut multipart = multipart.map_err(|_| ApiError::BadRequest(NO_FILE.to_string()))?;

    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() == Some(LEADS_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            file = Some(bytes);
            break;
        }
    }

    let bytes = file.ok_or_else(|| ApiError::BadRequest(NO_FILE.to_string()))?;
    let leads = parse_leads(bytes.as_ref())?;

    state.store.put_leads(&leads).await?;
    info!("Stored {} uploaded leads", leads.len());

    Ok(Json(MessageResponse::new(format!(
        "{} leads uploaded successfully.",
        leads.len()
    ))))
}
