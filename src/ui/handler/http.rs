//! HTTP handlers for the observability endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::infrastructure::dto::http::RoomSummaryDto;

use super::super::state::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.registry.rooms().await;

    let summaries = rooms
        .into_iter()
        .map(|(room_id, participant_count)| RoomSummaryDto {
            id: room_id.as_str().to_string(),
            participant_count,
        })
        .collect();

    Json(summaries)
}
