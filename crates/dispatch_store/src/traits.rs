//! Dispatch store trait definitions.

use async_trait::async_trait;
use entities::{
    Activity, ActivityType, AuthSession, NewTechnician, NewTicket, PresenceStatus, Technician,
    TechnicianRole, TechnicianUpdate, Ticket, TicketStatus, TicketUpdate,
};
use tokio::sync::broadcast;

use crate::{DashboardStats, DispatchStoreResult, StoreEvent, TicketCounts};

/// Filter options for listing technicians.
#[derive(Debug, Clone, Default)]
pub struct TechnicianFilter {
    /// Case-insensitive substring of the name or email.
    pub query: Option<String>,
    /// Filter by role.
    pub role: Option<TechnicianRole>,
    /// Filter by presence.
    pub status: Option<PresenceStatus>,
}

impl TechnicianFilter {
    /// Returns true if the technician passes every present criterion.
    pub fn matches(&self, technician: &Technician) -> bool {
        let mut matches = true;
        if let Some(query) = self.query.as_deref() {
            matches = matches && technician.matches_query(query);
        }
        if let Some(role) = self.role {
            matches = matches && technician.role == role;
        }
        if let Some(status) = self.status {
            matches = matches && technician.status == status;
        }
        matches
    }
}

/// Filter options for listing tickets.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Filter by status.
    pub status: Option<TicketStatus>,
    /// Case-insensitive substring of the title, ID or customer name.
    pub query: Option<String>,
}

impl TicketFilter {
    /// Returns true if the ticket passes every present criterion.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let mut matches = true;
        if let Some(status) = self.status {
            matches = matches && ticket.status == status;
        }
        if let Some(query) = self.query.as_deref() {
            matches = matches && ticket.matches_query(query);
        }
        matches
    }
}

/// Trait for the console's state store.
///
/// Operations addressing a record by ID fail with
/// [`DispatchStoreError::NotFound`](crate::DispatchStoreError::NotFound) when
/// the ID does not resolve, and leave the store untouched in that case.
#[async_trait]
pub trait DispatchStore: Send + Sync {
    // =========================================================================
    // Session operations
    // =========================================================================

    /// Signs the dispatcher in. Returns false, leaving the session as it was,
    /// when the credentials are rejected.
    async fn login(&self, email: &str, password: &str) -> DispatchStoreResult<bool>;

    /// Signs the dispatcher out.
    async fn logout(&self) -> DispatchStoreResult<()>;

    /// Gets the current session.
    async fn session(&self) -> DispatchStoreResult<AuthSession>;

    // =========================================================================
    // Technician operations
    // =========================================================================

    /// Lists technicians in roster order.
    async fn list_technicians(
        &self,
        filter: TechnicianFilter,
    ) -> DispatchStoreResult<Vec<Technician>>;

    /// Gets a technician by ID.
    async fn get_technician(&self, id: &str) -> DispatchStoreResult<Option<Technician>>;

    /// Lists technicians that can be offered for assignment.
    async fn available_technicians(&self) -> DispatchStoreResult<Vec<Technician>>;

    /// Adds a technician to the roster.
    async fn add_technician(&self, technician: NewTechnician) -> DispatchStoreResult<Technician>;

    /// Merges fields into a technician.
    async fn update_technician(
        &self,
        id: &str,
        update: TechnicianUpdate,
    ) -> DispatchStoreResult<Technician>;

    /// Removes a technician from the roster. Tickets assigned to them keep
    /// their assignee.
    async fn delete_technician(&self, id: &str) -> DispatchStoreResult<Technician>;

    // =========================================================================
    // Ticket operations
    // =========================================================================

    /// Lists tickets with optional filters, along with counts over all tickets.
    async fn list_tickets(
        &self,
        filter: TicketFilter,
    ) -> DispatchStoreResult<(Vec<Ticket>, TicketCounts)>;

    /// Gets a ticket by ID.
    async fn get_ticket(&self, id: &str) -> DispatchStoreResult<Option<Ticket>>;

    /// Creates a ticket.
    async fn add_ticket(&self, ticket: NewTicket) -> DispatchStoreResult<Ticket>;

    /// Merges fields into a ticket. Any status is accepted.
    async fn update_ticket(&self, id: &str, update: TicketUpdate) -> DispatchStoreResult<Ticket>;

    /// Binds a ticket to a technician.
    async fn assign_ticket(
        &self,
        ticket_id: &str,
        technician_id: &str,
    ) -> DispatchStoreResult<Ticket>;

    /// Removes a ticket.
    async fn delete_ticket(&self, id: &str) -> DispatchStoreResult<Ticket>;

    // =========================================================================
    // Activity operations
    // =========================================================================

    /// Lists activities, newest first.
    async fn list_activities(&self, limit: Option<usize>) -> DispatchStoreResult<Vec<Activity>>;

    /// Appends an entry to the activity log.
    async fn add_activity(
        &self,
        action: String,
        activity_type: ActivityType,
    ) -> DispatchStoreResult<Activity>;

    // =========================================================================
    // Aggregates and notifications
    // =========================================================================

    /// Computes the dashboard counters.
    async fn dashboard_stats(&self) -> DispatchStoreResult<DashboardStats>;

    /// Subscribes to changes.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}
