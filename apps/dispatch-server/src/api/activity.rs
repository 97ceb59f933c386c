//! Activity feed endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use dispatch_store::DispatchStore;
use rpc_protocol::{
    requests::{AddActivityRequest, ListActivitiesRequest},
    responses::{ActivityResponse, ListActivitiesResponse},
};

use super::require_text;
use crate::error::ServerResult;
use crate::state::AppState;

/// Lists the most recent activities, newest first.
pub async fn list_activities<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<ListActivitiesRequest>,
) -> ServerResult<Json<ListActivitiesResponse>> {
    let activities = state.store.list_activities(request.limit).await?;
    Ok(Json(ListActivitiesResponse { activities }))
}

/// Appends an entry to the activity feed.
pub async fn add_activity<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<AddActivityRequest>,
) -> ServerResult<Json<ActivityResponse>> {
    require_text("action", &request.action)?;

    let activity = state
        .store
        .add_activity(request.action, request.activity_type)
        .await?;

    tracing::info!(activity_id = %activity.id, "Activity logged");

    Ok(Json(ActivityResponse { activity }))
}
