/**
 * Room Participant Counter
 *
 * Tracks the live participant count per room and keeps three views of it
 * in sync: the durable `rooms.participants` column on the backend, the
 * in-process cache served by `GET /room-participants`, and the realtime
 * listeners fed by the counts broadcast (triggered by the handlers after
 * every successful update).
 *
 * # Consistency
 *
 * After a successful write the cache holds the value the backend
 * confirmed, not the value this process computed, so cache and store
 * cannot permanently diverge from a single writer's perspective.
 *
 * Join and leave are read-modify-write against the backend with no
 * per-room serialization: two concurrent joins for the same room can both
 * read the same count and both write `count + 1`, losing an increment.
 * Clients holding the conferencing widget's own participant list
 * reconcile with `set`.
 */

use crate::backend::error::BackendError;
use crate::backend::server::config::PersistFailurePolicy;
use crate::backend::supabase::{SupabaseClient, SupabaseError};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Action of a `POST /room-participants` request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantAction {
    Join,
    Leave,
    /// Caller supplies an authoritative count (from the widget's own list)
    Set,
}

impl ParticipantAction {
    /// Parse the wire value; `None` for anything but join/leave/set
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "join" => Some(Self::Join),
            "leave" => Some(Self::Leave),
            "set" => Some(Self::Set),
            _ => None,
        }
    }
}

/// In-memory participant count cache
///
/// An explicit, injectable store: cloned into handlers through the app
/// state rather than living in a process-wide static, so lifecycle and
/// test isolation stay visible. The lock is mandatory: handlers run
/// concurrently on a multi-threaded runtime.
///
/// Populated lazily per room, never persisted; strictly a best-effort
/// mirror of the durable column.
#[derive(Clone, Debug, Default)]
pub struct ParticipantCache {
    counts: Arc<RwLock<HashMap<String, u32>>>,
}

impl ParticipantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last confirmed count for a room, if the room was touched since start
    pub async fn get(&self, room_id: &str) -> Option<u32> {
        self.counts.read().await.get(room_id).copied()
    }

    /// Record the confirmed count for a room
    pub async fn set(&self, room_id: &str, count: u32) {
        self.counts.write().await.insert(room_id.to_string(), count);
    }

    /// Full snapshot of all cached counts
    pub async fn snapshot(&self) -> HashMap<String, u32> {
        self.counts.read().await.clone()
    }
}

#[derive(Debug, Deserialize)]
struct RoomCountRow {
    participants: Option<i64>,
}

fn clamp(count: i64) -> u32 {
    count.clamp(0, u32::MAX as i64) as u32
}

/// Apply a participant update and return the resulting count
///
/// `join` and `leave` read the current authoritative count (defaulting to
/// 0 when the row is absent or invalid) and write back the adjusted
/// value; `set` writes the clamped requested count directly. Without a
/// configured backend the counter operates on the cache alone.
///
/// On a failed durable write the policy decides: `Ignore` logs and keeps
/// the computed value (the client-visible action still succeeds), `Fail`
/// surfaces the error.
pub async fn update_participants(
    supabase: Option<&SupabaseClient>,
    cache: &ParticipantCache,
    policy: PersistFailurePolicy,
    room_id: &str,
    action: ParticipantAction,
    requested: Option<i64>,
) -> Result<u32, BackendError> {
    let target = match action {
        ParticipantAction::Set => clamp(requested.unwrap_or(0)),
        ParticipantAction::Join => current_count(supabase, cache, room_id)
            .await
            .saturating_add(1),
        ParticipantAction::Leave => current_count(supabase, cache, room_id)
            .await
            .saturating_sub(1),
    };

    let confirmed = match supabase {
        Some(client) => match persist_count(client, room_id, target).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!("no room row updated for '{}', keeping computed value", room_id);
                target
            }
            Err(e) => match policy {
                PersistFailurePolicy::Ignore => {
                    tracing::warn!("failed to persist participants for '{}': {}", room_id, e);
                    target
                }
                PersistFailurePolicy::Fail => return Err(e.into()),
            },
        },
        None => target,
    };

    cache.set(room_id, confirmed).await;
    Ok(confirmed)
}

async fn current_count(
    supabase: Option<&SupabaseClient>,
    cache: &ParticipantCache,
    room_id: &str,
) -> u32 {
    let Some(client) = supabase else {
        return cache.get(room_id).await.unwrap_or(0);
    };

    match client
        .select::<RoomCountRow>("rooms", "participants", &[("id", room_id)], None)
        .await
    {
        Ok(rows) => rows
            .into_iter()
            .next()
            .and_then(|row| row.participants)
            .map(clamp)
            .unwrap_or(0),
        Err(e) => {
            tracing::warn!("failed to read participants for '{}': {}", room_id, e);
            0
        }
    }
}

async fn persist_count(
    client: &SupabaseClient,
    room_id: &str,
    count: u32,
) -> Result<Option<u32>, SupabaseError> {
    let rows = client
        .update(
            "rooms",
            &serde_json::json!({ "participants": count }),
            &[("id", room_id)],
        )
        .await?;

    Ok(rows
        .first()
        .and_then(|row| row.get("participants"))
        .and_then(|value| value.as_i64())
        .map(clamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn apply(
        cache: &ParticipantCache,
        action: ParticipantAction,
        count: Option<i64>,
    ) -> u32 {
        update_participants(
            None,
            cache,
            PersistFailurePolicy::Ignore,
            "r1",
            action,
            count,
        )
        .await
        .unwrap()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(ParticipantAction::parse("join"), Some(ParticipantAction::Join));
        assert_eq!(ParticipantAction::parse("leave"), Some(ParticipantAction::Leave));
        assert_eq!(ParticipantAction::parse("set"), Some(ParticipantAction::Set));
        assert_eq!(ParticipantAction::parse("JOIN"), None);
        assert_eq!(ParticipantAction::parse(""), None);
    }

    #[tokio::test]
    async fn test_join_leave_set_sequence() {
        let cache = ParticipantCache::new();

        for expected in 1..=3 {
            let count = apply(&cache, ParticipantAction::Join, None).await;
            assert_eq!(count, expected);
        }

        assert_eq!(apply(&cache, ParticipantAction::Leave, None).await, 2);
        assert_eq!(apply(&cache, ParticipantAction::Set, Some(10)).await, 10);
        assert_eq!(cache.get("r1").await, Some(10));
    }

    #[tokio::test]
    async fn test_leave_clamps_at_zero() {
        let cache = ParticipantCache::new();
        assert_eq!(apply(&cache, ParticipantAction::Leave, None).await, 0);
    }

    #[tokio::test]
    async fn test_set_clamps_negative_to_zero() {
        let cache = ParticipantCache::new();
        assert_eq!(apply(&cache, ParticipantAction::Set, Some(-5)).await, 0);
    }

    #[tokio::test]
    async fn test_set_without_count_defaults_to_zero() {
        let cache = ParticipantCache::new();
        cache.set("r1", 7).await;
        assert_eq!(apply(&cache, ParticipantAction::Set, None).await, 0);
    }

    #[tokio::test]
    async fn test_snapshot_reflects_touched_rooms_only() {
        let cache = ParticipantCache::new();
        cache.set("r1", 2).await;
        cache.set("r2", 5).await;

        let snapshot = cache.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("r1"), Some(&2));
        assert_eq!(snapshot.get("r2"), Some(&5));
        assert_eq!(snapshot.get("r3"), None);
    }
}
