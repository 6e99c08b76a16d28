//! Middleware Module
//!
//! Request-processing middleware; currently the session extractor used by
//! the authenticated endpoints.

pub mod auth;

pub use auth::SessionUser;
