//! Server Module
//!
//! Server-side infrastructure: configuration loading, the shared
//! application state, and app assembly.
//!
//! # Module Structure
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - configuration loading (backend client, settings)
//! - **`init`** - server initialization and app creation

pub mod config;
pub mod init;
pub mod state;

pub use init::{create_app, create_state};
pub use state::AppState;
