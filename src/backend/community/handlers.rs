/**
 * Community Membership Handlers
 *
 * `POST /community-members` applies a join/leave; `GET /community-members`
 * reads the aggregate count and, when a `userId` is supplied, the
 * caller's membership flag.
 */

use crate::backend::community::registry::{get_membership, set_membership, MemberProfile, MembershipAction};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::supabase::SupabaseClient;
use crate::shared::{MembershipRequest, MembershipResponse, SharedError};
use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;

/// Handle `POST /community-members`
///
/// # Errors
///
/// * `400 Bad Request` - missing user id or unknown action
/// * `500 Internal Server Error` - backend not configured or write failure
pub async fn post_community_members(
    State(state): State<AppState>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<MembershipResponse>, BackendError> {
    let user_id = request
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SharedError::validation("userId", "must be a non-empty string"))?;

    let action = request
        .action
        .as_deref()
        .map(str::trim)
        .and_then(MembershipAction::parse)
        .ok_or_else(|| SharedError::validation("action", "must be join or leave"))?;

    let client = state
        .supabase
        .as_ref()
        .ok_or_else(|| BackendError::not_configured("community"))?;

    let profile = MemberProfile {
        user_id: user_id.to_string(),
        user_name: request.user_name.clone(),
        user_email: request.user_email.clone(),
        user_image: request.user_image.clone(),
    };

    let response = set_membership(client, state.settings.write_strategy, action, &profile).await?;

    tracing::info!(
        "user '{}' {:?} community ({} members)",
        user_id,
        action,
        response.members
    );

    Ok(Json(response))
}

/// Handle `GET /community-members`
///
/// # Errors
///
/// * `500 Internal Server Error` - backend not configured or query failure
pub async fn get_community_members(
    State(supabase): State<Option<SupabaseClient>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MembershipResponse>, BackendError> {
    let client = supabase.ok_or_else(|| BackendError::not_configured("community"))?;

    let response = get_membership(&client, params.get("userId").map(String::as_str)).await?;

    Ok(Json(response))
}
