//! Technician entity definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a roster member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TechnicianRole {
    /// Field worker, eligible for ticket assignment.
    #[default]
    Technician,
    /// Supervises technicians.
    Manager,
}

/// Presence of a roster member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Reachable and accepting work.
    Online,
    /// Not reachable.
    #[default]
    Offline,
}

/// A field-service worker or manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, free-form.
    pub phone: String,
    /// Role.
    pub role: TechnicianRole,
    /// Presence.
    pub status: PresenceStatus,
    /// Number of tickets assigned to this technician so far.
    pub active_jobs: u32,
}

impl Technician {
    /// Builds a technician from a creation request, with a fresh id.
    ///
    /// New technicians start offline with no active jobs.
    pub fn from_new(new: NewTechnician) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            role: new.role,
            status: PresenceStatus::Offline,
            active_jobs: 0,
        }
    }

    /// Returns true if this technician can be offered for assignment.
    pub fn is_assignable(&self) -> bool {
        self.status == PresenceStatus::Online && self.role == TechnicianRole::Technician
    }

    /// Returns true if `query` is a case-insensitive substring of the name or email.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }

    /// Merges the present fields of `update` into this technician.
    pub fn apply(&mut self, update: TechnicianUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(active_jobs) = update.active_jobs {
            self.active_jobs = active_jobs;
        }
    }
}

/// Fields supplied when adding a technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTechnician {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: TechnicianRole,
}

impl NewTechnician {
    /// Creates a new technician request with the default role.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            role: TechnicianRole::default(),
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: TechnicianRole) -> Self {
        self.role = role;
        self
    }
}

/// Partial update of a technician. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<TechnicianRole>,
    pub status: Option<PresenceStatus>,
    pub active_jobs: Option<u32>,
}

impl TechnicianUpdate {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.active_jobs.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technician_from_new() {
        let tech = Technician::from_new(
            NewTechnician::new("Ada Park", "ada@example.com")
                .with_phone("+1 (555) 000-0000")
                .with_role(TechnicianRole::Manager),
        );

        assert!(!tech.id.is_empty());
        assert_eq!(tech.name, "Ada Park");
        assert_eq!(tech.role, TechnicianRole::Manager);
        assert_eq!(tech.status, PresenceStatus::Offline);
        assert_eq!(tech.active_jobs, 0);
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = Technician::from_new(NewTechnician::new("A", "a@example.com"));
        let b = Technician::from_new(NewTechnician::new("A", "a@example.com"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut tech = Technician::from_new(NewTechnician::new("Ada", "ada@example.com"));
        tech.apply(TechnicianUpdate {
            status: Some(PresenceStatus::Online),
            ..Default::default()
        });

        assert_eq!(tech.status, PresenceStatus::Online);
        assert_eq!(tech.name, "Ada");
        assert_eq!(tech.email, "ada@example.com");
    }

    #[test]
    fn test_assignable_requires_online_technician() {
        let mut tech = Technician::from_new(NewTechnician::new("Ada", "ada@example.com"));
        assert!(!tech.is_assignable());

        tech.status = PresenceStatus::Online;
        assert!(tech.is_assignable());

        tech.role = TechnicianRole::Manager;
        assert!(!tech.is_assignable());
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let tech = Technician::from_new(NewTechnician::new("Sarah Martinez", "sarah.m@example.com"));
        assert!(tech.matches_query("MART"));
        assert!(tech.matches_query("sarah.m@"));
        assert!(!tech.matches_query("john"));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(TechnicianUpdate::default().is_empty());
        assert!(!TechnicianUpdate {
            active_jobs: Some(0),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&TechnicianRole::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
        let role: TechnicianRole = serde_json::from_str("\"technician\"").unwrap();
        assert_eq!(role, TechnicianRole::Technician);
        assert!(serde_json::from_str::<TechnicianRole>("\"admin\"").is_err());
    }
}
