//! Server-Sent Events stream of store changes
//!
//! Clients hold a connection to `GET /api/events` and re-fetch whatever a
//! change touches. Each SSE message carries the event name (`ticket_assigned`
//! and so on) and the JSON-encoded [`StoreEvent`](dispatch_store::StoreEvent).

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use dispatch_store::DispatchStore;
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, warn};

use crate::state::AppState;

/// SSE endpoint for subscribing to store changes.
pub async fn stream_events<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut events = BroadcastStream::new(state.store.subscribe());
    debug!("Event stream opened");

    let stream = async_stream::stream! {
        while let Some(result) = events.next().await {
            match result {
                Ok(event) => match Event::default().event(event.name()).json_data(&event) {
                    Ok(message) => yield Ok::<_, Infallible>(message),
                    Err(e) => warn!("Failed to serialize store event: {}", e),
                },
                Err(e) => {
                    // Lagged receivers skip ahead
                    debug!("Event stream lagged: {}", e);
                }
            }
        }

        debug!("Event stream ended");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
