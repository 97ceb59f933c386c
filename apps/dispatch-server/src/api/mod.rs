//! API endpoints.

pub mod activity;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod technician;
pub mod ticket;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use dispatch_store::DispatchStore;

use crate::{
    error::{ServerError, ServerResult},
    middleware::require_session,
    state::AppState,
};

/// Creates the API router with all endpoints.
pub fn create_router<S: DispatchStore + 'static>(
    state: Arc<AppState<S>>,
) -> Router<Arc<AppState<S>>> {
    let guarded = Router::new()
        // Technician endpoints
        .route("/api/technician/list", post(technician::list_technicians::<S>))
        .route("/api/technician/get", post(technician::get_technician::<S>))
        .route("/api/technician/available", post(technician::available_technicians::<S>))
        .route("/api/technician/add", post(technician::add_technician::<S>))
        .route("/api/technician/update", post(technician::update_technician::<S>))
        .route("/api/technician/delete", post(technician::delete_technician::<S>))
        // Ticket endpoints
        .route("/api/ticket/list", post(ticket::list_tickets::<S>))
        .route("/api/ticket/get", post(ticket::get_ticket::<S>))
        .route("/api/ticket/create", post(ticket::create_ticket::<S>))
        .route("/api/ticket/update", post(ticket::update_ticket::<S>))
        .route("/api/ticket/update-status", post(ticket::update_ticket_status::<S>))
        .route("/api/ticket/assign", post(ticket::assign_ticket::<S>))
        .route("/api/ticket/delete", post(ticket::delete_ticket::<S>))
        // Activity and dashboard endpoints
        .route("/api/activity/list", post(activity::list_activities::<S>))
        .route("/api/activity/add", post(activity::add_activity::<S>))
        .route("/api/dashboard/stats", get(dashboard::get_stats::<S>))
        // Change notifications
        .route("/api/events", get(events::stream_events::<S>))
        .route_layer(middleware::from_fn_with_state(state, require_session::<S>));

    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login::<S>))
        .route("/api/auth/logout", post(auth::logout::<S>))
        .route("/api/auth/session", get(auth::get_session::<S>))
        // Health check
        .route("/health", get(health_check))
        .merge(guarded)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Fails with `invalid_request` if `value` is blank.
fn require_text(field: &str, value: &str) -> ServerResult<()> {
    if value.trim().is_empty() {
        return Err(ServerError::InvalidRequest(format!("{field} is required")));
    }
    Ok(())
}

/// Like [`require_text`], for fields of a partial update.
fn reject_blank(field: &str, value: Option<&str>) -> ServerResult<()> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

/// Drops blank search strings.
fn non_blank(query: Option<String>) -> Option<String> {
    query.filter(|q| !q.trim().is_empty())
}
