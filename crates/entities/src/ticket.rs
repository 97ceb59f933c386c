//! Service ticket entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix of every ticket identifier.
pub const TICKET_ID_PREFIX: &str = "TKT-";

/// Status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    /// Waiting for assignment.
    #[default]
    New,
    /// Bound to a technician.
    Assigned,
    /// Technician is on site.
    InProgress,
    /// Work done.
    Completed,
    /// Refused by the technician or the dispatcher.
    Declined,
}

impl TicketStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Declined => "declined",
        }
    }

    /// Transitions a client should offer from this status.
    ///
    /// Advisory only: the store accepts any status on update.
    pub fn offered_transitions(&self) -> &'static [TicketStatus] {
        match self {
            Self::New => &[Self::Assigned, Self::Declined],
            Self::Assigned => &[Self::InProgress, Self::Declined],
            Self::InProgress => &[Self::Completed, Self::Declined],
            Self::Completed | Self::Declined => &[],
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// The technician a ticket is bound to.
///
/// The name is denormalized at assignment time and is not refreshed when the
/// technician is renamed or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Technician ID.
    pub id: String,
    /// Technician name at assignment time.
    pub name: String,
}

/// A unit of requested field-service work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Identifier in `TKT-NNN` form.
    pub id: String,
    /// Short summary.
    pub title: String,
    /// Details reported by the customer.
    pub description: String,
    /// Current status.
    pub status: TicketStatus,
    /// Priority.
    pub priority: TicketPriority,
    /// Assigned technician, if any.
    pub assignee: Option<Assignee>,
    /// Service address.
    pub location: String,
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Builds a ticket from a creation request.
    pub fn from_new(id: impl Into<String>, new: NewTicket) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: new.title,
            description: new.description,
            status: new.status,
            priority: new.priority,
            assignee: new.assignee,
            location: new.location,
            customer_name: new.customer_name,
            customer_phone: new.customer_phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the assigned technician's ID.
    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.id.as_str())
    }

    /// Returns the assigned technician's name.
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.name.as_str())
    }

    /// Returns true if `query` is a case-insensitive substring of the title,
    /// ID or customer name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.id.to_lowercase().contains(&query)
            || self.customer_name.to_lowercase().contains(&query)
    }

    /// Binds this ticket to a technician and marks it assigned.
    pub fn assign_to(&mut self, technician_id: impl Into<String>, technician_name: impl Into<String>) {
        self.status = TicketStatus::Assigned;
        self.assignee = Some(Assignee {
            id: technician_id.into(),
            name: technician_name.into(),
        });
        self.touch();
    }

    /// Merges the present fields of `update` into this ticket and refreshes
    /// `updated_at`.
    pub fn apply(&mut self, update: TicketUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(customer_name) = update.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(customer_phone) = update.customer_phone {
            self.customer_phone = customer_phone;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Fields supplied when creating a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assignee: Option<Assignee>,
    pub location: String,
    pub customer_name: String,
    pub customer_phone: String,
}

impl NewTicket {
    /// Creates an unassigned ticket request in status `new`.
    pub fn new(title: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TicketStatus::New,
            priority: TicketPriority::default(),
            assignee: None,
            location: String::new(),
            customer_name: customer_name.into(),
            customer_phone: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the service address.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the customer phone number.
    pub fn with_customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = phone.into();
        self
    }
}

/// Partial update of a ticket. Absent fields are left untouched.
///
/// The assignee is not part of the update; it changes only through
/// assignment so that ID and name always move together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub location: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

impl TicketUpdate {
    /// An update that only changes the status.
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.location.is_none()
            && self.customer_name.is_none()
            && self.customer_phone.is_none()
    }
}

/// Formats a ticket number as an identifier, zero-padded to width 3.
pub fn format_ticket_id(number: u32) -> String {
    format!("{TICKET_ID_PREFIX}{number:03}")
}

/// Extracts the number from a `TKT-NNN` identifier.
pub fn parse_ticket_number(id: &str) -> Option<u32> {
    id.strip_prefix(TICKET_ID_PREFIX)?.parse().ok()
}
