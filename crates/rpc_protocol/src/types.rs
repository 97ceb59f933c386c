//! Wire views of the store's records.

use chrono::{DateTime, Utc};
use dispatch_store::{DashboardStats, TicketCounts};
use entities::{
    Activity, AuthSession, CurrentUser, PresenceStatus, Technician, TechnicianRole, Ticket,
    TicketPriority, TicketStatus,
};
use serde::{Deserialize, Serialize};

/// Technician as sent to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
    pub status: PresenceStatus,
    pub active_jobs: u32,
}

impl From<&Technician> for TechnicianView {
    fn from(technician: &Technician) -> Self {
        Self {
            id: technician.id.clone(),
            name: technician.name.clone(),
            email: technician.email.clone(),
            phone: technician.phone.clone(),
            role: technician.role,
            status: technician.status,
            active_jobs: technician.active_jobs,
        }
    }
}

/// Ticket as sent to the dashboard.
///
/// The assignee is flattened into `assigneeId`/`assigneeName`, which are
/// either both present or both null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assignee_id: Option<String>,
    pub assignee_name: Option<String>,
    pub location: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Status changes the dashboard should offer for this ticket.
    pub available_transitions: Vec<TicketStatus>,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
            assignee_id: ticket.assignee_id().map(str::to_string),
            assignee_name: ticket.assignee_name().map(str::to_string),
            location: ticket.location.clone(),
            customer_name: ticket.customer_name.clone(),
            customer_phone: ticket.customer_phone.clone(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            available_transitions: ticket.status.offered_transitions().to_vec(),
        }
    }
}

/// Dispatcher session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub is_authenticated: bool,
    pub current_user: Option<CurrentUser>,
}

impl From<AuthSession> for SessionView {
    fn from(session: AuthSession) -> Self {
        Self {
            is_authenticated: session.is_authenticated,
            current_user: session.current_user,
        }
    }
}

/// Ticket counts, overall and per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCountsView {
    pub all: usize,
    pub new: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub declined: usize,
}

impl From<TicketCounts> for TicketCountsView {
    fn from(counts: TicketCounts) -> Self {
        Self {
            all: counts.all,
            new: counts.new,
            assigned: counts.assigned,
            in_progress: counts.in_progress,
            completed: counts.completed,
            declined: counts.declined,
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsView {
    pub total_tickets: usize,
    pub pending_assignment: usize,
    pub urgent_pending: usize,
    pub active_technicians: usize,
    pub total_technicians: usize,
    pub completed: usize,
    pub by_status: TicketCountsView,
    pub recent_activities: Vec<Activity>,
}

impl From<DashboardStats> for DashboardStatsView {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_tickets: stats.total_tickets,
            pending_assignment: stats.pending_assignment,
            urgent_pending: stats.urgent_pending,
            active_technicians: stats.active_technicians,
            total_technicians: stats.total_technicians,
            completed: stats.completed,
            by_status: stats.by_status.into(),
            recent_activities: stats.recent_activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use entities::{NewTicket, TICKET_ID_PREFIX};

    use super::*;

    #[test]
    fn test_ticket_view_is_camel_case() {
        let mut ticket = Ticket::from_new(format!("{TICKET_ID_PREFIX}001"), NewTicket::new("Leak", "Acme"));
        ticket.assign_to("2", "Sarah Martinez");

        let json = serde_json::to_value(TicketView::from(&ticket)).unwrap();

        assert_eq!(json["assigneeId"], "2");
        assert_eq!(json["assigneeName"], "Sarah Martinez");
        assert_eq!(json["customerName"], "Acme");
        assert_eq!(json["status"], "assigned");
        assert_eq!(
            json["availableTransitions"],
            serde_json::json!(["in-progress", "declined"])
        );
    }

    #[test]
    fn test_unassigned_ticket_has_null_pair() {
        let ticket = Ticket::from_new("TKT-002", NewTicket::new("Leak", "Acme"));
        let json = serde_json::to_value(TicketView::from(&ticket)).unwrap();

        assert!(json["assigneeId"].is_null());
        assert!(json["assigneeName"].is_null());
    }

    #[test]
    fn test_session_view() {
        let json = serde_json::to_value(SessionView::from(AuthSession::signed_out())).unwrap();
        assert_eq!(json["isAuthenticated"], false);
        assert!(json["currentUser"].is_null());
    }

    #[test]
    fn test_technician_view_fields() {
        let technician = Technician::from_new(entities::NewTechnician::new("Priya", "p@example.com"));
        let json = serde_json::to_value(TechnicianView::from(&technician)).unwrap();

        assert_eq!(json["activeJobs"], 0);
        assert_eq!(json["status"], "offline");
        assert_eq!(json["role"], "technician");
    }
}
