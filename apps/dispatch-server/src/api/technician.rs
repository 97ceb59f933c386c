//! Technician roster endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use dispatch_store::{DispatchStore, TechnicianFilter};
use entities::{NewTechnician, Technician, TechnicianUpdate};
use rpc_protocol::{
    requests::*,
    responses::{ListTechniciansResponse, TechnicianResponse},
    TechnicianView,
};

use super::{non_blank, reject_blank, require_text};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

fn to_response(technician: &Technician) -> Json<TechnicianResponse> {
    Json(TechnicianResponse {
        technician: technician.into(),
    })
}

fn to_list(technicians: &[Technician]) -> Json<ListTechniciansResponse> {
    Json(ListTechniciansResponse {
        technicians: technicians.iter().map(TechnicianView::from).collect(),
    })
}

/// Lists technicians matching the search, role and presence filters.
pub async fn list_technicians<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<ListTechniciansRequest>,
) -> ServerResult<Json<ListTechniciansResponse>> {
    let filter = TechnicianFilter {
        query: non_blank(request.query),
        role: request.role,
        status: request.status,
    };

    let technicians = state.store.list_technicians(filter).await?;
    Ok(to_list(&technicians))
}

/// Gets a technician by ID.
pub async fn get_technician<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<GetTechnicianRequest>,
) -> ServerResult<Json<TechnicianResponse>> {
    let technician = state
        .store
        .get_technician(&request.technician_id)
        .await?
        .ok_or_else(|| {
            ServerError::NotFound(format!("Technician {} not found", request.technician_id))
        })?;

    Ok(to_response(&technician))
}

/// Lists the technicians that can take an assignment.
pub async fn available_technicians<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListTechniciansResponse>> {
    let technicians = state.store.available_technicians().await?;
    Ok(to_list(&technicians))
}

/// Adds a technician to the roster.
pub async fn add_technician<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<AddTechnicianRequest>,
) -> ServerResult<Json<TechnicianResponse>> {
    require_text("name", &request.name)?;
    require_text("email", &request.email)?;
    require_text("phone", &request.phone)?;

    let new_technician = NewTechnician::new(request.name, request.email)
        .with_phone(request.phone)
        .with_role(request.role);
    let technician = state.store.add_technician(new_technician).await?;

    tracing::info!(technician_id = %technician.id, "Technician added");

    Ok(to_response(&technician))
}

/// Updates a technician's fields.
pub async fn update_technician<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<UpdateTechnicianRequest>,
) -> ServerResult<Json<TechnicianResponse>> {
    reject_blank("name", request.name.as_deref())?;
    reject_blank("email", request.email.as_deref())?;

    let update = TechnicianUpdate {
        name: request.name,
        email: request.email,
        phone: request.phone,
        role: request.role,
        status: request.status,
        active_jobs: request.active_jobs,
    };
    if update.is_empty() {
        return Err(ServerError::InvalidRequest("No fields to update".to_string()));
    }
    let technician = state
        .store
        .update_technician(&request.technician_id, update)
        .await?;

    tracing::info!(technician_id = %technician.id, "Technician updated");

    Ok(to_response(&technician))
}

/// Removes a technician from the roster.
pub async fn delete_technician<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<DeleteTechnicianRequest>,
) -> ServerResult<Json<TechnicianResponse>> {
    let technician = state
        .store
        .delete_technician(&request.technician_id)
        .await?;

    tracing::info!(technician_id = %technician.id, "Technician removed");

    Ok(to_response(&technician))
}
