/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Realtime subscription (SSE)
 * 2. API routes (rooms, community, quiz)
 * 3. Fallback handler (404)
 *
 * A permissive CORS layer wraps the router: the endpoints are consumed
 * directly by browser clients on other origins.
 */

use crate::backend::realtime::subscription::handle_realtime_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route(
        "/realtime",
        axum::routing::get(handle_realtime_subscription),
    );

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.layer(CorsLayer::permissive()).with_state(app_state)
}
