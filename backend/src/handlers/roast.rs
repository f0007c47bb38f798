use crate::AppState;
use crate::error::RoastError;
use axum::{Json, extract::State};
use shared::models::{RoastRequest, RoastResponse};

pub async fn generate_roast(
    State(state): State<AppState>,
    Json(payload): Json<RoastRequest>,
) -> Result<Json<RoastResponse>, RoastError> {
    let roast = state
        .roaster
        .produce_roast(&payload.code, &payload.character_id)
        .await?;

    Ok(Json(RoastResponse {
        roast: roast.text,
        severity: roast.severity,
        character_id: roast.character_id,
    }))
}
