//! Common test utilities and helpers
//!
//! Shared fixtures for the integration suites: app state construction,
//! a `TestServer` wrapper, and a Supabase client pointed at a wiremock
//! server standing in for the managed backend.
#![allow(dead_code)]

use axum_test::TestServer;
use tokio::sync::broadcast;
use vocably::backend::rooms::participants::ParticipantCache;
use vocably::backend::routes::create_router;
use vocably::backend::server::config::Settings;
use vocably::backend::server::state::AppState;
use vocably::backend::supabase::SupabaseClient;
use vocably::shared::RealtimeEvent;

/// Build an app state with the given backend client and default settings
pub fn test_state(supabase: Option<SupabaseClient>) -> AppState {
    test_state_with(supabase, Settings::default())
}

/// Build an app state with explicit settings
pub fn test_state_with(supabase: Option<SupabaseClient>, settings: Settings) -> AppState {
    let (counts_broadcast, _) = broadcast::channel::<RealtimeEvent>(100);
    AppState {
        participants: ParticipantCache::new(),
        counts_broadcast,
        supabase,
        settings,
    }
}

/// Start a test server over the full router for the given state
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).unwrap()
}

/// Supabase client talking to a wiremock stand-in for the backend
pub fn supabase_for(mock: &wiremock::MockServer) -> SupabaseClient {
    SupabaseClient::new(mock.uri(), "test-service-key")
}
