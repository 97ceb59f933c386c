//! Response bodies.

use entities::Activity;
use serde::{Deserialize, Serialize};

use crate::types::*;

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: SessionView,
}

// ============================================================================
// Technician Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTechniciansResponse {
    pub technicians: Vec<TechnicianView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicianResponse {
    pub technician: TechnicianView,
}

// ============================================================================
// Ticket Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<TicketView>,
    /// Counts over all tickets, ignoring the request's filters.
    pub counts: TicketCountsView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub ticket: TicketView,
}

// ============================================================================
// Activity and Dashboard Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListActivitiesResponse {
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub activity: Activity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub stats: DashboardStatsView,
}
