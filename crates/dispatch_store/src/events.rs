//! Change notifications for store subscribers.

use entities::{Activity, TicketStatus};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the store event channel.
const CHANNEL_CAPACITY: usize = 256;

/// A change made to the store.
///
/// Serialized with a snake_case `type` tag and camelCase fields, for example
/// `{"type":"ticket_assigned","ticketId":"TKT-001","technicianId":"2"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    /// The dispatcher signed in or out.
    SessionChanged { is_authenticated: bool },
    /// A technician joined the roster.
    TechnicianAdded { technician_id: String },
    /// A technician's fields changed.
    TechnicianUpdated { technician_id: String },
    /// A technician left the roster.
    TechnicianRemoved { technician_id: String },
    /// A ticket was created.
    TicketCreated { ticket_id: String },
    /// A ticket's fields changed.
    TicketUpdated {
        ticket_id: String,
        status: TicketStatus,
    },
    /// A ticket was bound to a technician.
    TicketAssigned {
        ticket_id: String,
        technician_id: String,
    },
    /// A ticket was removed.
    TicketDeleted { ticket_id: String },
    /// An entry was added to the activity log.
    ActivityLogged { activity: Activity },
}

impl StoreEvent {
    /// Returns the event name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionChanged { .. } => "session_changed",
            Self::TechnicianAdded { .. } => "technician_added",
            Self::TechnicianUpdated { .. } => "technician_updated",
            Self::TechnicianRemoved { .. } => "technician_removed",
            Self::TicketCreated { .. } => "ticket_created",
            Self::TicketUpdated { .. } => "ticket_updated",
            Self::TicketAssigned { .. } => "ticket_assigned",
            Self::TicketDeleted { .. } => "ticket_deleted",
            Self::ActivityLogged { .. } => "activity_logged",
        }
    }
}

/// Fan-out of store events to any number of subscribers.
#[derive(Debug)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBroadcaster {
    /// Creates a new broadcaster.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribes to all subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event to current subscribers.
    pub fn publish(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
