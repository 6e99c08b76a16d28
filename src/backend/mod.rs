//! Backend Module
//!
//! This module contains all server-side code for the Vocably application:
//! an Axum HTTP server exposing the room, community, and quiz endpoints,
//! with realtime count fan-out and persistence through the managed data
//! backend.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`rooms`** - participant counter, interest toggle, room handlers
//! - **`community`** - membership registry and handlers
//! - **`quiz`** - quiz score submission
//! - **`auth`** - session token verification
//! - **`middleware`** - session extractor
//! - **`realtime`** - counts broadcast and SSE subscription
//! - **`supabase`** - managed data backend client
//! - **`error`** - backend error types and response conversion
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the participant cache, the counts
//! broadcast channel, the optional backend client, and the runtime
//! settings. State is extracted per handler via `FromRef`.

pub mod auth;
pub mod community;
pub mod error;
pub mod middleware;
pub mod quiz;
pub mod realtime;
pub mod rooms;
pub mod routes;
pub mod server;
pub mod supabase;
