//! Auth Module
//!
//! Verification of session tokens issued by the identity provider. The
//! provider itself is external; this service only checks the bearer token
//! and reads the caller's identity out of its claims.

pub mod sessions;

pub use sessions::{verify_token, Claims, SessionError};
