/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events subscription handler for
 * the `GET /realtime` endpoint. Connected clients receive every broadcast
 * event, in practice the `counts` snapshots pushed after participant
 * updates.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged receivers skip ahead without dropping the connection
 */

use crate::backend::realtime::broadcast::CountsBroadcast;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures_util::stream;

/// Handle `GET /realtime`
///
/// Subscribes the client to the broadcast channel and streams each event
/// as an SSE message named after its event type.
pub async fn handle_realtime_subscription(
    State(broadcast_tx): State<CountsBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::debug!("realtime subscription opened");

    let broadcast_rx = broadcast_tx.subscribe();

    let stream = stream::unfold(broadcast_rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let event_data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("failed to serialize realtime event: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default()
                        .event(event.event_name().to_string())
                        .data(event_data);

                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("realtime receiver lagged, skipped {} events", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    tracing::debug!("broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(axum::response::sse::KeepAlive::default())
}
