/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Categories
 *
 * - Handler errors: invalid request input, missing parameters
 * - Configuration errors: the managed data backend is not configured
 * - Supabase errors: a table query or RPC against the backend failed
 *
 * The error taxonomy mirrors the HTTP surface: client input problems map to
 * 400, a missing backend configuration to 500, duplicate-resource conflicts
 * to 409, and everything else backend-related to 500.
 */

use crate::backend::supabase::SupabaseError;
use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant carries enough context to produce the JSON error body; no
/// error crosses the request boundary as anything richer than a message
/// string.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing fields, invalid request)
    #[error("{message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The managed data backend is not configured
    #[error("{message}")]
    NotConfigured {
        /// Human-readable error message
        message: String,
    },

    /// A table query or RPC against the managed backend failed
    #[error(transparent)]
    Supabase(#[from] SupabaseError),

    /// Shared error (validation, serialization)
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a "backend not configured" error
    pub fn not_configured(what: &str) -> Self {
        Self::NotConfigured {
            message: format!("{what} backend not configured"),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotConfigured { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Supabase(err) => {
                if err.is_unique_violation() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Shared(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the error message for the JSON body
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotConfigured { message } => message.clone(),
            Self::Supabase(err) => err.to_string(),
            Self::Shared(err) => err.to_string(),
        }
    }
}
