//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion into JSON error
//! responses.

pub mod conversion;
pub mod types;

pub use types::BackendError;
