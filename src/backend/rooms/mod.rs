//! Rooms Module
//!
//! Room-scoped functionality: the live participant counter with its
//! in-memory cache, the interest toggle, and the HTTP handlers for the
//! room endpoints.
//!
//! # Module Structure
//!
//! - **`participants`** - participant cache and counter core
//! - **`interest`** - interest RPC and interested-user listing
//! - **`handlers`** - HTTP handlers for the room endpoints

pub mod handlers;
pub mod interest;
pub mod participants;

pub use participants::{ParticipantAction, ParticipantCache};
