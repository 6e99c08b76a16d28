/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `ParticipantCache` guards its map with an async `RwLock`
 * - `broadcast::Sender` is thread-safe and can be cloned
 * - `Option<SupabaseClient>` clones a connection pool handle
 * - `Settings` is `Copy`
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract the specific
 * part of the state they need instead of the whole `AppState`.
 */

use crate::backend::realtime::broadcast::CountsBroadcast;
use crate::backend::rooms::participants::ParticipantCache;
use crate::backend::server::config::Settings;
use crate::backend::supabase::SupabaseClient;
use axum::extract::FromRef;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// In-memory participant count cache
    ///
    /// An explicit injectable store rather than a process-wide variable,
    /// so lifecycle and test isolation stay visible.
    pub participants: ParticipantCache,

    /// Broadcast channel feeding the realtime subscribers
    pub counts_broadcast: CountsBroadcast,

    /// Managed data backend client
    ///
    /// `None` when the backend is not configured; handlers decide whether
    /// to degrade (participant counter) or answer 500 (everything else).
    pub supabase: Option<SupabaseClient>,

    /// Runtime settings decided at startup
    pub settings: Settings,
}

impl FromRef<AppState> for ParticipantCache {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.participants.clone()
    }
}

impl FromRef<AppState> for CountsBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.counts_broadcast.clone()
    }
}

impl FromRef<AppState> for Option<SupabaseClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.supabase.clone()
    }
}

impl FromRef<AppState> for Settings {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.settings
    }
}
