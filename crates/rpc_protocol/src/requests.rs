//! Request bodies.

use std::fmt;

use entities::{ActivityType, PresenceStatus, TechnicianRole, TicketPriority, TicketStatus};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Technician Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTechniciansRequest {
    pub query: Option<String>,
    pub role: Option<TechnicianRole>,
    pub status: Option<PresenceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTechnicianRequest {
    pub technician_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTechnicianRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: TechnicianRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTechnicianRequest {
    pub technician_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<TechnicianRole>,
    pub status: Option<PresenceStatus>,
    pub active_jobs: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTechnicianRequest {
    pub technician_id: String,
}

// ============================================================================
// Ticket Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTicketsRequest {
    pub status: Option<TicketStatus>,
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTicketRequest {
    pub ticket_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TicketPriority,
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub location: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub ticket_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub location: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketStatusRequest {
    pub ticket_id: String,
    pub status: TicketStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketRequest {
    pub ticket_id: String,
    pub technician_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTicketRequest {
    pub ticket_id: String,
}

// ============================================================================
// Activity Requests
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListActivitiesRequest {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivityRequest {
    pub action: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest {
            email: "dispatch@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", request);

        assert!(debug.contains("dispatch@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_create_ticket_defaults() {
        let request: CreateTicketRequest =
            serde_json::from_str(r#"{"title":"Leak","customerName":"Acme"}"#).unwrap();

        assert_eq!(request.priority, TicketPriority::Medium);
        assert!(request.status.is_none());
        assert!(request.description.is_empty());
    }

    #[test]
    fn test_add_activity_request_type_field() {
        let request: AddActivityRequest =
            serde_json::from_str(r#"{"action":"Emily Chen went online","type":"status"}"#).unwrap();
        assert_eq!(request.activity_type, ActivityType::Status);
    }

    #[test]
    fn test_empty_list_request() {
        let request: ListTicketsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.status.is_none());

        let request: ListTicketsRequest =
            serde_json::from_str(r#"{"status":"in-progress"}"#).unwrap();
        assert_eq!(request.status, Some(TicketStatus::InProgress));
    }
}
