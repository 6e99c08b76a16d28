/**
 * Real-time Event System
 *
 * This module defines event types for the real-time notification system.
 * The primary event is the `counts` snapshot pushed after every participant
 * update; the `Custom` variant leaves room for future event kinds without a
 * wire format change.
 */
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type of real-time event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Participant count snapshot event
    Counts,
    /// Custom event type
    Custom(String),
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealtimeEvent {
    /// Type of event
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// Timestamp when event occurred
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new real-time event
    pub fn new(event_type: EventType, payload: serde_json::Value) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a counts event carrying the full participant snapshot
    pub fn counts(rooms: &HashMap<String, u32>) -> Self {
        Self::new(
            EventType::Counts,
            serde_json::json!({
                "rooms": rooms,
            }),
        )
    }

    /// SSE event name for this event
    pub fn event_name(&self) -> &str {
        match &self.event_type {
            EventType::Counts => "counts",
            EventType::Custom(name) => name.as_str(),
        }
    }
}
