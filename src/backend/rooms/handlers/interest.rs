/**
 * Room Interest Handlers
 *
 * `POST /room-interest` toggles the caller's interest through the atomic
 * procedure; there is no manual fallback, so an RPC failure is a 500.
 * `GET /room-interested-users` lists a room's interested users oldest
 * first.
 */

use crate::backend::error::BackendError;
use crate::backend::rooms::interest::{list_interested_users, toggle_interest, InterestProfile};
use crate::backend::supabase::SupabaseClient;
use crate::shared::rooms::{InterestedUsersResponse, RoomInterestRequest, RoomInterestResponse};
use crate::shared::SharedError;
use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;

/// Handle `POST /room-interest`
///
/// # Errors
///
/// * `400 Bad Request` - missing room id, user id, or interested flag
/// * `500 Internal Server Error` - backend not configured or RPC failure
pub async fn post_room_interest(
    State(supabase): State<Option<SupabaseClient>>,
    Json(request): Json<RoomInterestRequest>,
) -> Result<Json<RoomInterestResponse>, BackendError> {
    let room_id = request
        .room_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("roomId", "must be a non-empty string"))?;

    let user_id = request
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("userId", "must be a non-empty string"))?;

    let interested = request
        .interested
        .ok_or_else(|| SharedError::validation("interested", "must be a boolean"))?;

    let client = supabase.ok_or_else(|| BackendError::not_configured("interest"))?;

    let profile = InterestProfile {
        user_id: user_id.to_string(),
        user_name: request.user_name.clone(),
        user_email: request.user_email.clone(),
        user_image: request.user_image.clone(),
    };

    let toggle = toggle_interest(&client, room_id, interested, &profile).await?;

    tracing::info!(
        "user '{}' set interest={} on room '{}' ({} interested)",
        user_id,
        interested,
        room_id,
        toggle.interested_count
    );

    Ok(Json(RoomInterestResponse {
        ok: true,
        persisted: true,
        interested_count: Some(toggle.interested_count),
        user_interested: Some(toggle.user_interested),
    }))
}

/// Handle `GET /room-interested-users`
///
/// # Errors
///
/// * `400 Bad Request` - missing `roomId` query parameter
/// * `500 Internal Server Error` - backend not configured or query failure
pub async fn get_interested_users(
    State(supabase): State<Option<SupabaseClient>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InterestedUsersResponse>, BackendError> {
    let room_id = params
        .get("roomId")
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("roomId", "must be a non-empty string"))?;

    let client = supabase.ok_or_else(|| BackendError::not_configured("interest"))?;

    let interests = list_interested_users(&client, room_id).await?;

    Ok(Json(InterestedUsersResponse {
        count: interests.len(),
        interests,
    }))
}
