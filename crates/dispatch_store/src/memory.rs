//! In-memory dispatch store.

use std::{collections::VecDeque, fmt};

use async_trait::async_trait;
use auth::{CredentialVerifier, Credentials, MockCredentialVerifier};
use entities::{
    format_ticket_id, parse_ticket_number, Activity, ActivityType, AuthSession, NewTechnician,
    NewTicket, Technician, TechnicianUpdate, Ticket, TicketUpdate,
};
use tokio::sync::{broadcast, RwLock};

use crate::{
    seed, DashboardStats, DispatchStore, DispatchStoreError, DispatchStoreResult,
    EventBroadcaster, StoreEvent, TechnicianFilter, TicketCounts, TicketFilter,
    ACTIVITY_LOG_CAPACITY,
};

/// Everything the store owns. Guarded by a single lock so that a mutation
/// touching several collections is never observed half-done.
#[derive(Debug)]
struct DispatchState {
    session: AuthSession,
    technicians: Vec<Technician>,
    tickets: Vec<Ticket>,
    /// Newest first.
    activities: VecDeque<Activity>,
    /// Number used for the next ticket ID. Never reused after a deletion.
    next_ticket_number: u32,
}

impl DispatchState {
    fn new(technicians: Vec<Technician>, tickets: Vec<Ticket>, activities: Vec<Activity>) -> Self {
        let highest = tickets
            .iter()
            .filter_map(|t| parse_ticket_number(&t.id))
            .max()
            .unwrap_or(0);
        let next_ticket_number = highest.max(tickets.len() as u32) + 1;

        let mut activities: VecDeque<Activity> = activities.into();
        activities.truncate(ACTIVITY_LOG_CAPACITY);

        Self {
            session: AuthSession::signed_out(),
            technicians,
            tickets,
            activities,
            next_ticket_number,
        }
    }

    fn allocate_ticket_id(&mut self) -> String {
        let number = self.next_ticket_number.max(self.tickets.len() as u32 + 1);
        self.next_ticket_number = number + 1;
        format_ticket_id(number)
    }

    fn technician_index(&self, id: &str) -> DispatchStoreResult<usize> {
        self.technicians
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DispatchStoreError::not_found("Technician", id))
    }

    fn ticket_index(&self, id: &str) -> DispatchStoreResult<usize> {
        self.tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DispatchStoreError::not_found("Ticket", id))
    }
}

/// In-memory dispatch store.
pub struct MemoryDispatchStore {
    state: RwLock<DispatchState>,
    events: EventBroadcaster,
    verifier: Box<dyn CredentialVerifier>,
}

impl MemoryDispatchStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new(), Vec::new())
    }

    /// Creates a store loaded with the mock roster, tickets and activities.
    pub fn with_seed_data() -> Self {
        Self::from_records(seed::technicians(), seed::tickets(), seed::activities())
    }

    /// Creates a store from existing records. `activities` must be newest first.
    pub fn from_records(
        technicians: Vec<Technician>,
        tickets: Vec<Ticket>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            state: RwLock::new(DispatchState::new(technicians, tickets, activities)),
            events: EventBroadcaster::new(),
            verifier: Box::new(MockCredentialVerifier::new()),
        }
    }

    /// Prepends an activity, drops the oldest beyond capacity, and notifies
    /// subscribers.
    fn log_activity(
        &self,
        state: &mut DispatchState,
        action: String,
        activity_type: ActivityType,
    ) -> Activity {
        let activity = Activity::new(action, activity_type);
        state.activities.push_front(activity.clone());
        state.activities.truncate(ACTIVITY_LOG_CAPACITY);
        self.events.publish(StoreEvent::ActivityLogged {
            activity: activity.clone(),
        });
        activity
    }
}

impl Default for MemoryDispatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDispatchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDispatchStore")
            .field("state", &self.state)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DispatchStore for MemoryDispatchStore {
    // =========================================================================
    // Session operations
    // =========================================================================

    async fn login(&self, email: &str, password: &str) -> DispatchStoreResult<bool> {
        let user = match self.verifier.verify(&Credentials::new(email, password)) {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(error = %e, "Login rejected");
                return Ok(false);
            }
        };

        let mut state = self.state.write().await;
        tracing::debug!(email = %user.email, "Dispatcher signed in");
        state.session = AuthSession::signed_in(user);
        self.events.publish(StoreEvent::SessionChanged {
            is_authenticated: true,
        });
        Ok(true)
    }

    async fn logout(&self) -> DispatchStoreResult<()> {
        let mut state = self.state.write().await;
        state.session = AuthSession::signed_out();
        self.events.publish(StoreEvent::SessionChanged {
            is_authenticated: false,
        });
        Ok(())
    }

    async fn session(&self) -> DispatchStoreResult<AuthSession> {
        let state = self.state.read().await;
        Ok(state.session.clone())
    }

    // =========================================================================
    // Technician operations
    // =========================================================================

    async fn list_technicians(
        &self,
        filter: TechnicianFilter,
    ) -> DispatchStoreResult<Vec<Technician>> {
        let state = self.state.read().await;
        Ok(state
            .technicians
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    async fn get_technician(&self, id: &str) -> DispatchStoreResult<Option<Technician>> {
        let state = self.state.read().await;
        Ok(state.technicians.iter().find(|t| t.id == id).cloned())
    }

    async fn available_technicians(&self) -> DispatchStoreResult<Vec<Technician>> {
        let state = self.state.read().await;
        Ok(state
            .technicians
            .iter()
            .filter(|t| t.is_assignable())
            .cloned()
            .collect())
    }

    async fn add_technician(&self, technician: NewTechnician) -> DispatchStoreResult<Technician> {
        let mut state = self.state.write().await;
        let technician = Technician::from_new(technician);
        state.technicians.push(technician.clone());

        tracing::debug!(technician_id = %technician.id, "Technician added");
        self.events.publish(StoreEvent::TechnicianAdded {
            technician_id: technician.id.clone(),
        });
        self.log_activity(
            &mut state,
            format!("New technician added: {}", technician.name),
            ActivityType::Creation,
        );
        Ok(technician)
    }

    async fn update_technician(
        &self,
        id: &str,
        update: TechnicianUpdate,
    ) -> DispatchStoreResult<Technician> {
        let mut state = self.state.write().await;
        let index = state.technician_index(id)?;
        let technician = &mut state.technicians[index];
        technician.apply(update);
        let technician = technician.clone();

        self.events.publish(StoreEvent::TechnicianUpdated {
            technician_id: technician.id.clone(),
        });
        Ok(technician)
    }

    async fn delete_technician(&self, id: &str) -> DispatchStoreResult<Technician> {
        let mut state = self.state.write().await;
        let index = state.technician_index(id)?;
        let technician = state.technicians.remove(index);

        tracing::debug!(technician_id = %technician.id, "Technician removed");
        self.events.publish(StoreEvent::TechnicianRemoved {
            technician_id: technician.id.clone(),
        });
        self.log_activity(
            &mut state,
            format!("Technician removed: {}", technician.name),
            ActivityType::Status,
        );
        Ok(technician)
    }

    // =========================================================================
    // Ticket operations
    // =========================================================================

    async fn list_tickets(
        &self,
        filter: TicketFilter,
    ) -> DispatchStoreResult<(Vec<Ticket>, TicketCounts)> {
        let state = self.state.read().await;
        let counts = TicketCounts::tally(&state.tickets);
        let tickets = state
            .tickets
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        Ok((tickets, counts))
    }

    async fn get_ticket(&self, id: &str) -> DispatchStoreResult<Option<Ticket>> {
        let state = self.state.read().await;
        Ok(state.tickets.iter().find(|t| t.id == id).cloned())
    }

    async fn add_ticket(&self, ticket: NewTicket) -> DispatchStoreResult<Ticket> {
        let mut state = self.state.write().await;
        let id = state.allocate_ticket_id();
        let ticket = Ticket::from_new(id, ticket);
        state.tickets.push(ticket.clone());

        tracing::debug!(ticket_id = %ticket.id, "Ticket created");
        self.events.publish(StoreEvent::TicketCreated {
            ticket_id: ticket.id.clone(),
        });
        self.log_activity(
            &mut state,
            format!("New ticket created: {}", ticket.title),
            ActivityType::Creation,
        );
        Ok(ticket)
    }

    async fn update_ticket(&self, id: &str, update: TicketUpdate) -> DispatchStoreResult<Ticket> {
        let mut state = self.state.write().await;
        let index = state.ticket_index(id)?;
        let ticket = &mut state.tickets[index];
        ticket.apply(update);
        let ticket = ticket.clone();

        tracing::debug!(ticket_id = %ticket.id, status = %ticket.status, "Ticket updated");
        self.events.publish(StoreEvent::TicketUpdated {
            ticket_id: ticket.id.clone(),
            status: ticket.status,
        });
        Ok(ticket)
    }

    async fn assign_ticket(
        &self,
        ticket_id: &str,
        technician_id: &str,
    ) -> DispatchStoreResult<Ticket> {
        let mut state = self.state.write().await;
        let technician_index = state.technician_index(technician_id)?;
        let ticket_index = state.ticket_index(ticket_id)?;

        // The previous assignee, if any, keeps its count.
        let technician = &mut state.technicians[technician_index];
        technician.active_jobs = technician.active_jobs.saturating_add(1);
        let technician_name = technician.name.clone();

        let ticket = &mut state.tickets[ticket_index];
        ticket.assign_to(technician_id, technician_name.clone());
        let ticket = ticket.clone();

        tracing::debug!(ticket_id = %ticket_id, technician_id = %technician_id, "Ticket assigned");
        self.events.publish(StoreEvent::TicketAssigned {
            ticket_id: ticket_id.to_string(),
            technician_id: technician_id.to_string(),
        });
        self.log_activity(
            &mut state,
            format!("Ticket #{} assigned to {}", ticket_id, technician_name),
            ActivityType::Assignment,
        );
        Ok(ticket)
    }

    async fn delete_ticket(&self, id: &str) -> DispatchStoreResult<Ticket> {
        let mut state = self.state.write().await;
        let index = state.ticket_index(id)?;
        let ticket = state.tickets.remove(index);

        tracing::debug!(ticket_id = %ticket.id, "Ticket deleted");
        self.events.publish(StoreEvent::TicketDeleted {
            ticket_id: ticket.id.clone(),
        });
        Ok(ticket)
    }

    // =========================================================================
    // Activity operations
    // =========================================================================

    async fn list_activities(&self, limit: Option<usize>) -> DispatchStoreResult<Vec<Activity>> {
        let state = self.state.read().await;
        Ok(state
            .activities
            .iter()
            .take(limit.unwrap_or(ACTIVITY_LOG_CAPACITY))
            .cloned()
            .collect())
    }

    async fn add_activity(
        &self,
        action: String,
        activity_type: ActivityType,
    ) -> DispatchStoreResult<Activity> {
        let mut state = self.state.write().await;
        Ok(self.log_activity(&mut state, action, activity_type))
    }

    // =========================================================================
    // Aggregates and notifications
    // =========================================================================

    async fn dashboard_stats(&self) -> DispatchStoreResult<DashboardStats> {
        let state = self.state.read().await;
        Ok(DashboardStats::compute(
            &state.technicians,
            &state.tickets,
            &state.activities,
        ))
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
