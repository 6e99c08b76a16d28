/**
 * Room Interest Operations
 *
 * The interest toggle goes through a single atomic server-side procedure,
 * `toggle_room_interest`, which records or removes the (room, user)
 * association and returns the updated aggregate plus the caller's
 * resulting state in one round trip. There is deliberately no manual
 * fallback on this path: an RPC failure surfaces to the caller.
 *
 * The listing reads the association table directly, oldest first.
 */

use crate::backend::supabase::{SupabaseClient, SupabaseError};
use crate::shared::rooms::InterestedUser;
use serde::Deserialize;

/// Result of the `toggle_room_interest` procedure
#[derive(Debug, Clone, Deserialize)]
pub struct InterestToggle {
    pub interested_count: i64,
    pub user_interested: bool,
}

/// Caller identity attached to an interest toggle
#[derive(Debug, Clone, Default)]
pub struct InterestProfile {
    pub user_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

/// Toggle a user's interest in a room via the atomic procedure
///
/// Idempotent on the backend: repeating the same toggle does not create
/// duplicate rows or double-count.
pub async fn toggle_interest(
    client: &SupabaseClient,
    room_id: &str,
    interested: bool,
    profile: &InterestProfile,
) -> Result<InterestToggle, SupabaseError> {
    client
        .rpc(
            "toggle_room_interest",
            &serde_json::json!({
                "p_room_id": room_id,
                "p_user_id": profile.user_id,
                "p_interested": interested,
                "p_user_name": profile.user_name,
                "p_user_email": profile.user_email,
                "p_user_image": profile.user_image,
            }),
        )
        .await
}

#[derive(Debug, Deserialize)]
struct InterestRow {
    user_id: String,
    user_name: Option<String>,
    user_email: Option<String>,
    user_image: Option<String>,
    created_at: Option<String>,
}

/// List the users interested in a room, ordered by ascending creation time
pub async fn list_interested_users(
    client: &SupabaseClient,
    room_id: &str,
) -> Result<Vec<InterestedUser>, SupabaseError> {
    let rows: Vec<InterestRow> = client
        .select(
            "room_interests",
            "user_id,user_name,user_email,user_image,created_at",
            &[("room_id", room_id)],
            Some("created_at.asc"),
        )
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| InterestedUser {
            user_id: row.user_id,
            name: row.user_name,
            email: row.user_email,
            image: row.user_image,
            joined_at: row.created_at,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_result_deserializes() {
        let toggle: InterestToggle =
            serde_json::from_str(r#"{"interested_count":3,"user_interested":true}"#).unwrap();
        assert_eq!(toggle.interested_count, 3);
        assert!(toggle.user_interested);
    }

    #[test]
    fn test_interest_row_tolerates_null_meta() {
        let row: InterestRow = serde_json::from_str(
            r#"{"user_id":"u1","user_name":null,"user_email":null,"user_image":null,"created_at":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(row.user_id, "u1");
        assert!(row.user_name.is_none());
    }
}
