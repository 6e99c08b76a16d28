//! Community Membership Wire Types
//!
//! Request and response bodies for the `/community-members` endpoint.
//! Required fields are `Option` and validated in the handler so a missing
//! field maps to a 400 with a JSON error body.

use serde::{Deserialize, Serialize};

/// Body of `POST /community-members`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembershipRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[serde(rename = "userEmail", default)]
    pub user_email: Option<String>,
    #[serde(rename = "userImage", default)]
    pub user_image: Option<String>,
}

/// Response of both `POST` and `GET /community-members`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub members: i64,
    pub joined: bool,
}
