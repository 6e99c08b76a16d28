/**
 * Real-time Event Broadcasting
 *
 * This module provides utilities for broadcasting real-time events to all
 * subscribers. Events are broadcast using `tokio::sync::broadcast`, a
 * multi-producer, multi-consumer channel: every subscriber receives a copy
 * of each event.
 *
 * Publishing is fire-and-forget. A send with no subscribers is not an
 * error, and a failed send never propagates to the caller's request.
 */

use crate::shared::RealtimeEvent;
use tokio::sync::broadcast;

/// Broadcast channel for count snapshots and other realtime events
///
/// Cloned into every handler through the app state; broadcasting from
/// anywhere in the application goes through this sender.
pub type CountsBroadcast = broadcast::Sender<RealtimeEvent>;

/// Broadcast a real-time event to all subscribers
///
/// Returns the number of active subscribers that received the event
/// (0 if no subscribers).
pub async fn broadcast_event(broadcast_tx: &CountsBroadcast, event: RealtimeEvent) -> usize {
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!("event broadcast to {} subscribers", subscriber_count);
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("no subscribers to receive event: {:?}", e);
            0
        }
    }
}
