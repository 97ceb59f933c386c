//! Dashboard endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use dispatch_store::DispatchStore;
use rpc_protocol::responses::DashboardStatsResponse;

use crate::error::ServerResult;
use crate::state::AppState;

/// Returns the dashboard counters and the latest activities.
pub async fn get_stats<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<DashboardStatsResponse>> {
    let stats = state.store.dashboard_stats().await?;
    Ok(Json(DashboardStatsResponse {
        stats: stats.into(),
    }))
}
