//! Room HTTP Handlers
//!
//! Handlers for the room endpoints:
//! - `GET/POST /room-participants` - participant counter
//! - `POST /room-interest` - interest toggle
//! - `GET /room-interested-users` - interest listing
//! - `GET /connection-details` - conferencing widget lookup

pub mod connection;
pub mod interest;
pub mod participants;

pub use connection::get_connection_details;
pub use interest::{get_interested_users, post_room_interest};
pub use participants::{get_room_participants, update_room_participants};
