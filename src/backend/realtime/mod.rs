//! Realtime Module
//!
//! The fan-out channel for participant count snapshots: a broadcast
//! sender the counter handlers publish into, and an SSE subscription
//! endpoint that streams events to connected clients.

pub mod broadcast;
pub mod subscription;

pub use broadcast::{broadcast_event, CountsBroadcast};
