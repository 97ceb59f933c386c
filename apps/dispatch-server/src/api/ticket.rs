//! Service ticket endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use dispatch_store::{DispatchStore, TicketFilter};
use entities::{NewTicket, Ticket, TicketUpdate};
use rpc_protocol::{
    requests::*,
    responses::{ListTicketsResponse, TicketResponse},
    TicketView,
};

use super::{non_blank, reject_blank, require_text};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

fn to_response(ticket: &Ticket) -> Json<TicketResponse> {
    Json(TicketResponse {
        ticket: ticket.into(),
    })
}

/// Lists tickets matching the status tab and search, with per-status counts.
pub async fn list_tickets<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<ListTicketsRequest>,
) -> ServerResult<Json<ListTicketsResponse>> {
    let filter = TicketFilter {
        status: request.status,
        query: non_blank(request.query),
    };

    let (tickets, counts) = state.store.list_tickets(filter).await?;

    Ok(Json(ListTicketsResponse {
        tickets: tickets.iter().map(TicketView::from).collect(),
        counts: counts.into(),
    }))
}

/// Gets a ticket by ID.
pub async fn get_ticket<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<GetTicketRequest>,
) -> ServerResult<Json<TicketResponse>> {
    let ticket = state
        .store
        .get_ticket(&request.ticket_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Ticket {} not found", request.ticket_id)))?;

    Ok(to_response(&ticket))
}

/// Creates a ticket.
pub async fn create_ticket<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateTicketRequest>,
) -> ServerResult<Json<TicketResponse>> {
    require_text("title", &request.title)?;
    require_text("customerName", &request.customer_name)?;

    let mut new_ticket = NewTicket::new(request.title, request.customer_name)
        .with_description(request.description)
        .with_priority(request.priority)
        .with_location(request.location)
        .with_customer_phone(request.customer_phone);
    if let Some(status) = request.status {
        new_ticket = new_ticket.with_status(status);
    }

    let ticket = state.store.add_ticket(new_ticket).await?;

    tracing::info!(ticket_id = %ticket.id, "Ticket created");

    Ok(to_response(&ticket))
}

/// Updates a ticket's fields.
pub async fn update_ticket<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<UpdateTicketRequest>,
) -> ServerResult<Json<TicketResponse>> {
    reject_blank("title", request.title.as_deref())?;
    reject_blank("customerName", request.customer_name.as_deref())?;

    let update = TicketUpdate {
        title: request.title,
        description: request.description,
        status: request.status,
        priority: request.priority,
        location: request.location,
        customer_name: request.customer_name,
        customer_phone: request.customer_phone,
    };
    if update.is_empty() {
        return Err(ServerError::InvalidRequest("No fields to update".to_string()));
    }
    let ticket = state.store.update_ticket(&request.ticket_id, update).await?;

    tracing::info!(ticket_id = %ticket.id, "Ticket updated");

    Ok(to_response(&ticket))
}

/// Moves a ticket to another status. Any status is accepted.
pub async fn update_ticket_status<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<UpdateTicketStatusRequest>,
) -> ServerResult<Json<TicketResponse>> {
    let ticket = state
        .store
        .update_ticket(&request.ticket_id, TicketUpdate::status(request.status))
        .await?;

    tracing::info!(ticket_id = %ticket.id, status = %ticket.status, "Ticket status updated");

    Ok(to_response(&ticket))
}

/// Assigns a ticket to a technician.
pub async fn assign_ticket<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<AssignTicketRequest>,
) -> ServerResult<Json<TicketResponse>> {
    let ticket = state
        .store
        .assign_ticket(&request.ticket_id, &request.technician_id)
        .await?;

    tracing::info!(
        ticket_id = %ticket.id,
        technician_id = %request.technician_id,
        "Ticket assigned"
    );

    Ok(to_response(&ticket))
}

/// Deletes a ticket.
pub async fn delete_ticket<S: DispatchStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<DeleteTicketRequest>,
) -> ServerResult<Json<TicketResponse>> {
    let ticket = state.store.delete_ticket(&request.ticket_id).await?;

    tracing::info!(ticket_id = %ticket.id, "Ticket deleted");

    Ok(to_response(&ticket))
}
