//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. All types here are plain serde-serializable
//! wire shapes with no server-side behavior attached.

/// Real-time event system
pub mod event;

/// Shared error types
pub mod error;

/// Room wire types (participants, interest)
pub mod rooms;

/// Community membership wire types
pub mod community;

/// Re-export commonly used types for convenience
pub use community::{MembershipRequest, MembershipResponse};
pub use error::SharedError;
pub use event::{EventType, RealtimeEvent};
pub use rooms::{
    ConnectionDetailsResponse, InterestedUser, InterestedUsersResponse, RoomCountsResponse,
    RoomInterestRequest, RoomInterestResponse, UpdateParticipantsRequest,
    UpdateParticipantsResponse,
};
