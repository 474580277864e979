//! Offer intake

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use leadscore_domain::Offer;
use leadscore_storage::ArtifactStore;
use tracing::info;

use crate::{error::ApiResult, models::MessageResponse, state::AppState, ApiError};

/// Replace the stored offer
pub async fn save_offer(
    State(state): State<AppState>,
    payload: Result<Json<Offer>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(offer) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    offer.validate()?;

    state.store.put_offer(&offer).await?;
    info!("Saved offer '{}'", offer.name);

    Ok(Json(MessageResponse::new("Offer details saved.")))
}
