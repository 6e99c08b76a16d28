//! Room Wire Types
//!
//! Request and response bodies for the room endpoints: participant counts,
//! interest toggles, and connection details. Key casing follows the HTTP
//! surface exactly (mixed camel/snake, as the web client expects).
//!
//! Required request fields are modeled as `Option` and validated in the
//! handlers, so a missing field produces a 400 with a JSON error body
//! instead of a bare deserialization rejection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `POST /room-participants`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateParticipantsRequest {
    #[serde(rename = "roomId", default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

/// Response of `POST /room-participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateParticipantsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
}

/// Response of `GET /room-participants`: the in-memory cache snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCountsResponse {
    pub rooms: HashMap<String, u32>,
}

/// Body of `POST /room-interest`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomInterestRequest {
    #[serde(rename = "roomId", default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub interested: Option<bool>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(rename = "userEmail", default)]
    pub user_email: Option<String>,
    #[serde(rename = "userImage", default)]
    pub user_image: Option<String>,
}

/// Response of `POST /room-interest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInterestResponse {
    pub ok: bool,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interested_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_interested: Option<bool>,
}

/// One entry of `GET /room-interested-users`, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterestedUser {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "joinedAt")]
    pub joined_at: Option<String>,
}

/// Response of `GET /room-interested-users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestedUsersResponse {
    pub interests: Vec<InterestedUser>,
    pub count: usize,
}

/// Response of `GET /connection-details`
///
/// The conferencing widget is addressed by room name alone; there is no
/// token exchange on this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDetailsResponse {
    #[serde(rename = "roomName")]
    pub room_name: String,
    #[serde(rename = "participantName")]
    pub participant_name: String,
}
