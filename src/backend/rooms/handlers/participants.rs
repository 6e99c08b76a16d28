/**
 * Participant Counter Handlers
 *
 * `GET /room-participants` serves the in-memory cache snapshot with no
 * backend read, so it reflects only rooms touched since process start.
 *
 * `POST /room-participants` applies a join/leave/set update, then pushes
 * the full cache snapshot to the realtime channel as a single `counts`
 * message, fire-and-forget. Under the default persist policy the response
 * is a success even when the durable write failed; see the counter core.
 */

use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::rooms::participants::{update_participants, ParticipantAction, ParticipantCache};
use crate::backend::server::state::AppState;
use crate::shared::rooms::{RoomCountsResponse, UpdateParticipantsRequest, UpdateParticipantsResponse};
use crate::shared::{RealtimeEvent, SharedError};
use axum::{extract::State, Json};

/// Handle `GET /room-participants`
pub async fn get_room_participants(
    State(cache): State<ParticipantCache>,
) -> Json<RoomCountsResponse> {
    Json(RoomCountsResponse {
        rooms: cache.snapshot().await,
    })
}

/// Handle `POST /room-participants`
///
/// # Errors
///
/// * `400 Bad Request` - missing room id or unknown action
pub async fn update_room_participants(
    State(state): State<AppState>,
    Json(request): Json<UpdateParticipantsRequest>,
) -> Result<Json<UpdateParticipantsResponse>, BackendError> {
    let room_id = request
        .room_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("roomId", "must be a non-empty string"))?;

    let action = request
        .action
        .as_deref()
        .and_then(ParticipantAction::parse)
        .ok_or_else(|| SharedError::validation("action", "must be one of join, leave, set"))?;

    let participants = update_participants(
        state.supabase.as_ref(),
        &state.participants,
        state.settings.persist_failures,
        room_id,
        action,
        request.count,
    )
    .await?;

    tracing::debug!("room '{}' now has {} participants", room_id, participants);

    let snapshot = state.participants.snapshot().await;
    broadcast_event(&state.counts_broadcast, RealtimeEvent::counts(&snapshot)).await;

    Ok(Json(UpdateParticipantsResponse {
        success: true,
        participants: Some(participants),
    }))
}
