use crate::AppState;
use axum::{Json, extract::State};
use shared::models::Character;

pub async fn list_characters(State(state): State<AppState>) -> Json<Vec<Character>> {
    Json(state.roaster.characters())
}
