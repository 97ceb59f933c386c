//! Sign-in endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use dispatch_store::DispatchStore;
use rpc_protocol::{requests::LoginRequest, responses::SessionResponse};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Signs the dispatcher in after the configured delay.
pub async fn login<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<SessionResponse>> {
    let delay = state.config.login_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    if !state.store.login(&request.email, &request.password).await? {
        tracing::warn!(email = %request.email, "Sign-in rejected");
        return Err(ServerError::InvalidCredentials);
    }

    tracing::info!(email = %request.email, "Dispatcher signed in");

    let session = state.store.session().await?;
    Ok(Json(SessionResponse {
        session: session.into(),
    }))
}

/// Signs the dispatcher out.
pub async fn logout<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<SessionResponse>> {
    state.store.logout().await?;

    tracing::info!("Dispatcher signed out");

    let session = state.store.session().await?;
    Ok(Json(SessionResponse {
        session: session.into(),
    }))
}

/// Returns the current session.
pub async fn get_session<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<SessionResponse>> {
    let session = state.store.session().await?;
    Ok(Json(SessionResponse {
        session: session.into(),
    }))
}
