//! Aggregate views computed from the store's collections.

use entities::{Activity, PresenceStatus, Technician, Ticket, TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};

/// Number of activities shown on the dashboard.
pub const DASHBOARD_ACTIVITY_COUNT: usize = 6;

/// Ticket counts, overall and per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    pub all: usize,
    pub new: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub declined: usize,
}

impl TicketCounts {
    /// Counts the given tickets.
    pub fn tally<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut counts = Self::default();
        for ticket in tickets {
            counts.all += 1;
            match ticket.status {
                TicketStatus::New => counts.new += 1,
                TicketStatus::Assigned => counts.assigned += 1,
                TicketStatus::InProgress => counts.in_progress += 1,
                TicketStatus::Completed => counts.completed += 1,
                TicketStatus::Declined => counts.declined += 1,
            }
        }
        counts
    }

    /// Returns the count for one status.
    pub fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::New => self.new,
            TicketStatus::Assigned => self.assigned,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Completed => self.completed,
            TicketStatus::Declined => self.declined,
        }
    }
}

/// Operational counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// All tickets.
    pub total_tickets: usize,
    /// Tickets still waiting for assignment.
    pub pending_assignment: usize,
    /// Urgent tickets still waiting for assignment.
    pub urgent_pending: usize,
    /// Roster members currently online.
    pub active_technicians: usize,
    /// Roster size.
    pub total_technicians: usize,
    /// Completed tickets.
    pub completed: usize,
    /// Per-status breakdown.
    pub by_status: TicketCounts,
    /// Most recent activities, newest first.
    pub recent_activities: Vec<Activity>,
}

impl DashboardStats {
    /// Computes the counters from the store's collections.
    pub fn compute<'a>(
        technicians: &[Technician],
        tickets: &[Ticket],
        activities: impl IntoIterator<Item = &'a Activity>,
    ) -> Self {
        let by_status = TicketCounts::tally(tickets);
        let urgent_pending = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::New && t.priority == TicketPriority::Urgent)
            .count();
        let active_technicians = technicians
            .iter()
            .filter(|t| t.status == PresenceStatus::Online)
            .count();

        Self {
            total_tickets: by_status.all,
            pending_assignment: by_status.new,
            urgent_pending,
            active_technicians,
            total_technicians: technicians.len(),
            completed: by_status.completed,
            by_status,
            recent_activities: activities
                .into_iter()
                .take(DASHBOARD_ACTIVITY_COUNT)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use entities::{NewTechnician, NewTicket};

    use super::*;

    #[test]
    fn test_tally() {
        let tickets = vec![
            Ticket::from_new("TKT-001", NewTicket::new("A", "c")),
            Ticket::from_new("TKT-002", NewTicket::new("B", "c").with_status(TicketStatus::Completed)),
            Ticket::from_new("TKT-003", NewTicket::new("C", "c")),
        ];
        let counts = TicketCounts::tally(&tickets);

        assert_eq!(counts.all, 3);
        assert_eq!(counts.get(TicketStatus::New), 2);
        assert_eq!(counts.get(TicketStatus::Completed), 1);
        assert_eq!(counts.get(TicketStatus::Declined), 0);
    }

    #[test]
    fn test_dashboard_stats() {
        let mut online = Technician::from_new(NewTechnician::new("On", "on@example.com"));
        online.status = PresenceStatus::Online;
        let offline = Technician::from_new(NewTechnician::new("Off", "off@example.com"));

        let tickets = vec![
            Ticket::from_new("TKT-001", NewTicket::new("A", "c").with_priority(TicketPriority::Urgent)),
            Ticket::from_new("TKT-002", NewTicket::new("B", "c")),
            Ticket::from_new(
                "TKT-003",
                NewTicket::new("C", "c")
                    .with_status(TicketStatus::Assigned)
                    .with_priority(TicketPriority::Urgent),
            ),
        ];
        let activities: Vec<Activity> = (0..10)
            .map(|i| Activity::new(format!("action {i}"), entities::ActivityType::Status))
            .collect();

        let stats = DashboardStats::compute(&[online, offline], &tickets, &activities);

        assert_eq!(stats.total_tickets, 3);
        assert_eq!(stats.pending_assignment, 2);
        assert_eq!(stats.urgent_pending, 1);
        assert_eq!(stats.active_technicians, 1);
        assert_eq!(stats.total_technicians, 2);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.recent_activities.len(), DASHBOARD_ACTIVITY_COUNT);
        assert_eq!(stats.recent_activities[0].action, "action 0");
    }
}
