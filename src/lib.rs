//! Vocably - Main Library
//!
//! Vocably is the backend for a topic-based voice/video chat room web
//! application with a lightweight community layer. The server exposes a
//! small JSON API: per-room live participant counts with realtime fan-out,
//! idempotent room interest toggles, a community membership registry,
//! session-authenticated quiz submission, and connection details for the
//! embedded conferencing widget.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Wire types shared between the server and its clients
//!   - Request/response bodies, realtime events, shared errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, route handlers, application state
//!   - Participant cache and counts broadcasting
//!   - Managed data backend client (table API + atomic procedures)
//!
//! # Design Notes
//!
//! Durable state lives in the managed backend; this process keeps only a
//! best-effort in-memory mirror of the participant counts. Membership
//! writes prefer single atomic server-side procedures; where a manual
//! fallback exists it is a startup-time configuration choice, not a
//! per-request exception path. Failures of the realtime publish step
//! never fail the caller's request.
//!
//! # Usage
//!
//! ```rust,no_run
//! use vocably::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve with axum
//! # }
//! ```

pub mod backend;
pub mod shared;
