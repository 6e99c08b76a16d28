/**
 * API Route Handlers
 *
 * This module wires the JSON API endpoints onto the router:
 *
 * ## Rooms
 * - `GET /room-participants` - participant cache snapshot
 * - `POST /room-participants` - join/leave/set participant update
 * - `POST /room-interest` - interest toggle
 * - `GET /room-interested-users` - interest listing
 * - `GET /connection-details` - conferencing widget lookup
 *
 * ## Community
 * - `POST /community-members` - join/leave the community
 * - `GET /community-members` - member count and caller's flag
 *
 * ## Quiz
 * - `POST /quiz/submit` - score submission (requires a session token)
 */

use crate::backend::community::handlers::{get_community_members, post_community_members};
use crate::backend::quiz::handlers::submit_quiz;
use crate::backend::rooms::handlers::{
    get_connection_details, get_interested_users, get_room_participants, post_room_interest,
    update_room_participants,
};
use crate::backend::server::state::AppState;
use axum::Router;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Participant counter
        .route(
            "/room-participants",
            axum::routing::get(get_room_participants).post(update_room_participants),
        )
        // Interest toggle
        .route("/room-interest", axum::routing::post(post_room_interest))
        .route(
            "/room-interested-users",
            axum::routing::get(get_interested_users),
        )
        // Conferencing widget lookup
        .route(
            "/connection-details",
            axum::routing::get(get_connection_details),
        )
        // Community membership
        .route(
            "/community-members",
            axum::routing::get(get_community_members).post(post_community_members),
        )
        // Quiz submission
        .route("/quiz/submit", axum::routing::post(submit_quiz))
}
