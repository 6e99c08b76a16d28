/**
 * Community Membership Registry
 *
 * Membership changes prefer the atomic `set_community_membership`
 * procedure, which performs the change and returns the updated count plus
 * the caller's membership flag in one round trip.
 *
 * When the configured write strategy permits, an RPC failure falls back
 * to manual table writes: insert or delete on the association table, a
 * unique-constraint violation on insert tolerated as "already joined",
 * then separate queries for the aggregate count and the caller's flag.
 * The fallback is not atomic relative to concurrent callers: overlapping
 * requests can interleave between the write and the count read.
 */

use crate::backend::error::BackendError;
use crate::backend::server::config::WriteStrategy;
use crate::backend::supabase::SupabaseClient;
use crate::shared::MembershipResponse;
use serde::Deserialize;

/// Action of a `POST /community-members` request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipAction {
    Join,
    Leave,
}

impl MembershipAction {
    /// Parse the wire value; `None` for anything but join/leave
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "join" => Some(Self::Join),
            "leave" => Some(Self::Leave),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Leave => "leave",
        }
    }
}

/// Caller identity attached to a membership change
#[derive(Debug, Clone, Default)]
pub struct MemberProfile {
    pub user_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

/// Result of the `set_community_membership` procedure
#[derive(Debug, Clone, Deserialize)]
struct MembershipChange {
    member_count: i64,
    joined: bool,
}

/// Apply a membership change and return the resulting registry state
///
/// Idempotent in both directions: joining twice or leaving a community
/// never joined is a no-op, not an error.
pub async fn set_membership(
    client: &SupabaseClient,
    strategy: WriteStrategy,
    action: MembershipAction,
    profile: &MemberProfile,
) -> Result<MembershipResponse, BackendError> {
    let rpc_result = client
        .rpc::<MembershipChange>(
            "set_community_membership",
            &serde_json::json!({
                "p_action": action.as_str(),
                "p_user_id": profile.user_id,
                "p_user_name": profile.user_name,
                "p_user_email": profile.user_email,
                "p_user_image": profile.user_image,
            }),
        )
        .await;

    match rpc_result {
        Ok(change) => Ok(MembershipResponse {
            members: change.member_count.max(0),
            joined: change.joined,
        }),
        Err(e) => match strategy {
            WriteStrategy::AtomicOnly => {
                tracing::error!("membership RPC failed (atomic-only): {}", e);
                Err(e.into())
            }
            WriteStrategy::Fallback => {
                tracing::warn!("membership RPC failed, using manual fallback: {}", e);
                manual_set_membership(client, action, profile).await
            }
        },
    }
}

async fn manual_set_membership(
    client: &SupabaseClient,
    action: MembershipAction,
    profile: &MemberProfile,
) -> Result<MembershipResponse, BackendError> {
    match action {
        MembershipAction::Join => {
            let row = serde_json::json!({
                "user_id": profile.user_id,
                "user_name": profile.user_name,
                "user_email": profile.user_email,
                "user_image": profile.user_image,
            });
            if let Err(e) = client.insert("community_members", &row).await {
                if e.is_unique_violation() {
                    tracing::debug!("user '{}' already joined", profile.user_id);
                } else {
                    return Err(e.into());
                }
            }
        }
        MembershipAction::Leave => {
            client
                .delete("community_members", &[("user_id", profile.user_id.as_str())])
                .await?;
        }
    }

    get_membership(client, Some(&profile.user_id)).await
}

#[derive(Debug, Deserialize)]
struct MemberIdRow {
    #[allow(dead_code)]
    user_id: String,
}

/// Read-only registry state: aggregate count plus the caller's flag
///
/// `joined` is `false` when no user id is supplied.
pub async fn get_membership(
    client: &SupabaseClient,
    user_id: Option<&str>,
) -> Result<MembershipResponse, BackendError> {
    let members = client.count("community_members", &[]).await?;

    let joined = match user_id {
        Some(id) if !id.trim().is_empty() => {
            let rows: Vec<MemberIdRow> = client
                .select("community_members", "user_id", &[("user_id", id)], None)
                .await?;
            !rows.is_empty()
        }
        _ => false,
    };

    Ok(MembershipResponse { members, joined })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(MembershipAction::parse("join"), Some(MembershipAction::Join));
        assert_eq!(MembershipAction::parse("leave"), Some(MembershipAction::Leave));
        assert_eq!(MembershipAction::parse("quit"), None);
    }

    #[test]
    fn test_membership_change_deserializes() {
        let change: MembershipChange =
            serde_json::from_str(r#"{"member_count":12,"joined":false}"#).unwrap();
        assert_eq!(change.member_count, 12);
        assert!(!change.joined);
    }
}
