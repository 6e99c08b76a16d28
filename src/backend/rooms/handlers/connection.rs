/**
 * Connection Details Handler
 *
 * `GET /connection-details` resolves a room id to the display name handed
 * to the embedded conferencing widget. The widget is addressed by room
 * name alone; no token exchange happens on this path.
 */

use crate::backend::error::BackendError;
use crate::backend::supabase::SupabaseClient;
use crate::shared::rooms::ConnectionDetailsResponse;
use crate::shared::SharedError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct RoomNameRow {
    name: Option<String>,
}

/// Handle `GET /connection-details`
///
/// # Errors
///
/// * `400 Bad Request` - missing `roomId` or `participantName`
/// * `404 Not Found` - no room with the given id
/// * `500 Internal Server Error` - backend not configured or query failure
pub async fn get_connection_details(
    State(supabase): State<Option<SupabaseClient>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ConnectionDetailsResponse>, BackendError> {
    let room_id = params
        .get("roomId")
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("roomId", "must be a non-empty string"))?;

    let participant_name = params
        .get("participantName")
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SharedError::validation("participantName", "must be a non-empty string"))?;

    let client = supabase.ok_or_else(|| BackendError::not_configured("rooms"))?;

    let rows: Vec<RoomNameRow> = client
        .select("rooms", "name", &[("id", room_id)], None)
        .await?;

    let room = rows
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "room not found"))?;

    Ok(Json(ConnectionDetailsResponse {
        room_name: room.name.unwrap_or_else(|| room_id.to_string()),
        participant_name: participant_name.to_string(),
    }))
}
