//! Session guard middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dispatch_store::DispatchStore;

use crate::{error::ServerError, state::AppState};

/// Rejects requests with 401 unless a dispatcher is signed in.
///
/// Skipped entirely when the server runs with `require_session` off.
pub async fn require_session<S: DispatchStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.session_required() {
        return next.run(request).await;
    }

    match state.store.session().await {
        Ok(session) if session.is_authenticated => next.run(request).await,
        Ok(_) => {
            tracing::debug!(path = %request.uri().path(), "No signed-in dispatcher");
            ServerError::AuthenticationRequired.into_response()
        }
        Err(e) => ServerError::from(e).into_response(),
    }
}
