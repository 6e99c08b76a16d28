/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: state creation, configuration loading, and route assembly.
 *
 * # Initialization Process
 *
 * 1. Create the participant cache and the counts broadcast channel
 * 2. Load runtime settings and the optional backend client
 * 3. Assemble the router
 *
 * A missing backend configuration never prevents startup; the server
 * runs with persistence disabled.
 */

use crate::backend::rooms::participants::ParticipantCache;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_settings, load_supabase};
use crate::backend::server::state::AppState;
use crate::shared::RealtimeEvent;
use axum::Router;
use tokio::sync::broadcast;

/// Create and configure the Axum application
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing Vocably backend server");

    let app_state = create_state();
    create_router(app_state)
}

/// Build the application state from the environment
///
/// Split out of `create_app` so tests can assemble a state with their own
/// backend client and keep a handle on the cache and broadcast channel.
pub fn create_state() -> AppState {
    let participants = ParticipantCache::new();

    // Capacity of 1000 is generous for count snapshots; slow subscribers
    // lag and skip rather than block the senders.
    let (counts_broadcast, _) = broadcast::channel::<RealtimeEvent>(1000);

    let settings = load_settings();
    let supabase = load_supabase();

    AppState {
        participants,
        counts_broadcast,
        supabase,
        settings,
    }
}
