//! Mock records loaded into a freshly started console.

use chrono::{Duration, Utc};
use entities::{
    Activity, ActivityType, Assignee, PresenceStatus, Technician, TechnicianRole, Ticket,
    TicketPriority, TicketStatus,
};

fn technician(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    role: TechnicianRole,
    status: PresenceStatus,
    active_jobs: u32,
) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        status,
        active_jobs,
    }
}

/// The seeded roster.
pub fn technicians() -> Vec<Technician> {
    use PresenceStatus::{Offline, Online};
    use TechnicianRole::{Manager, Technician as Tech};

    vec![
        technician("1", "John Doe", "john.doe@technobright.com", "+1 (555) 123-4567", Tech, Online, 3),
        technician("2", "Sarah Martinez", "sarah.m@technobright.com", "+1 (555) 234-5678", Tech, Online, 2),
        technician("3", "Mike Johnson", "mike.j@technobright.com", "+1 (555) 345-6789", Manager, Online, 0),
        technician("4", "Emily Chen", "emily.c@technobright.com", "+1 (555) 456-7890", Tech, Offline, 0),
        technician("5", "David Wilson", "david.w@technobright.com", "+1 (555) 567-8901", Tech, Online, 1),
    ]
}

struct TicketSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TicketStatus,
    priority: TicketPriority,
    assignee: Option<(&'static str, &'static str)>,
    location: &'static str,
    customer_name: &'static str,
    customer_phone: &'static str,
    created_minutes_ago: i64,
    updated_minutes_ago: i64,
}

impl TicketSeed {
    fn build(self) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status: self.status,
            priority: self.priority,
            assignee: self.assignee.map(|(id, name)| Assignee {
                id: id.to_string(),
                name: name.to_string(),
            }),
            location: self.location.to_string(),
            customer_name: self.customer_name.to_string(),
            customer_phone: self.customer_phone.to_string(),
            created_at: now - Duration::minutes(self.created_minutes_ago),
            updated_at: now - Duration::minutes(self.updated_minutes_ago),
        }
    }
}

/// The seeded tickets, `TKT-001` through `TKT-007`.
pub fn tickets() -> Vec<Ticket> {
    vec![
        TicketSeed {
            id: "TKT-001",
            title: "AC Repair at Block C",
            description: "Central air conditioning unit not cooling properly. Customer reports warm air.",
            status: TicketStatus::New,
            priority: TicketPriority::High,
            assignee: None,
            location: "Block C, Unit 405, Marina Heights",
            customer_name: "Robert Smith",
            customer_phone: "+1 (555) 111-2222",
            created_minutes_ago: 120,
            updated_minutes_ago: 120,
        },
        TicketSeed {
            id: "TKT-002",
            title: "Electrical Panel Inspection",
            description: "Annual safety inspection required for commercial building.",
            status: TicketStatus::Assigned,
            priority: TicketPriority::Medium,
            assignee: Some(("1", "John Doe")),
            location: "Tower A, Downtown Business Center",
            customer_name: "ABC Corporation",
            customer_phone: "+1 (555) 222-3333",
            created_minutes_ago: 300,
            updated_minutes_ago: 60,
        },
        TicketSeed {
            id: "TKT-003",
            title: "Plumbing Emergency - Water Leak",
            description: "Severe water leak in bathroom. Water spreading to adjacent rooms.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Urgent,
            assignee: Some(("2", "Sarah Martinez")),
            location: "234 Oak Street, Apt 12",
            customer_name: "Jennifer Lee",
            customer_phone: "+1 (555) 333-4444",
            created_minutes_ago: 180,
            updated_minutes_ago: 30,
        },
        TicketSeed {
            id: "TKT-004",
            title: "HVAC Maintenance",
            description: "Routine quarterly maintenance for office building HVAC system.",
            status: TicketStatus::Completed,
            priority: TicketPriority::Low,
            assignee: Some(("5", "David Wilson")),
            location: "Sunrise Office Park, Building 3",
            customer_name: "Tech Solutions Inc",
            customer_phone: "+1 (555) 444-5555",
            created_minutes_ago: 1440,
            updated_minutes_ago: 240,
        },
        TicketSeed {
            id: "TKT-005",
            title: "Generator Installation",
            description: "Install backup generator for residential property.",
            status: TicketStatus::Declined,
            priority: TicketPriority::Medium,
            assignee: Some(("4", "Emily Chen")),
            location: "567 Pine Avenue",
            customer_name: "Michael Brown",
            customer_phone: "+1 (555) 555-6666",
            created_minutes_ago: 480,
            updated_minutes_ago: 360,
        },
        TicketSeed {
            id: "TKT-006",
            title: "Fire Alarm System Check",
            description: "Monthly fire alarm system testing and certification.",
            status: TicketStatus::New,
            priority: TicketPriority::High,
            assignee: None,
            location: "Grand Hotel, 100 Central Blvd",
            customer_name: "Grand Hotel Management",
            customer_phone: "+1 (555) 666-7777",
            created_minutes_ago: 60,
            updated_minutes_ago: 60,
        },
        TicketSeed {
            id: "TKT-007",
            title: "Security Camera Repair",
            description: "Three outdoor cameras not recording. Need immediate repair.",
            status: TicketStatus::Assigned,
            priority: TicketPriority::High,
            assignee: Some(("1", "John Doe")),
            location: "Warehouse District, Unit 45",
            customer_name: "Secure Storage LLC",
            customer_phone: "+1 (555) 777-8888",
            created_minutes_ago: 240,
            updated_minutes_ago: 120,
        },
    ]
    .into_iter()
    .map(TicketSeed::build)
    .collect()
}

/// The seeded activity feed, in display order.
pub fn activities() -> Vec<Activity> {
    let now = Utc::now();
    [
        ("1", "John Doe accepted Ticket #TKT-002", 60, ActivityType::Assignment),
        ("2", "Sarah Martinez started work on Ticket #TKT-003", 30, ActivityType::Status),
        ("3", "David Wilson completed Ticket #TKT-004", 240, ActivityType::Completion),
        ("4", "New ticket created: AC Repair at Block C", 120, ActivityType::Creation),
        ("5", "Emily Chen declined Ticket #TKT-005", 360, ActivityType::Status),
    ]
    .into_iter()
    .map(|(id, action, minutes_ago, activity_type)| Activity {
        id: id.to_string(),
        action: action.to_string(),
        timestamp: now - Duration::minutes(minutes_ago),
        activity_type,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_assignees_resolve() {
        let roster = technicians();
        for ticket in tickets() {
            if let Some(assignee) = &ticket.assignee {
                let technician = roster.iter().find(|t| t.id == assignee.id).unwrap();
                assert_eq!(technician.name, assignee.name);
                assert_ne!(ticket.status, TicketStatus::New);
            }
        }
    }

    #[test]
    fn test_seeded_timestamps_are_ordered() {
        for ticket in tickets() {
            assert!(ticket.created_at <= ticket.updated_at, "{}", ticket.id);
        }
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(technicians().len(), 5);
        assert_eq!(tickets().len(), 7);
        assert_eq!(activities().len(), 5);
    }
}
