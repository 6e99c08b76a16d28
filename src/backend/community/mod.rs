//! Community Module
//!
//! The community membership registry: who has joined the community, with
//! an aggregate count. Changes prefer a single atomic server-side
//! procedure; a configurable fallback performs the manual table writes.

pub mod handlers;
pub mod registry;

pub use registry::{get_membership, set_membership, MemberProfile, MembershipAction};
