//! Activity log entry definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of state change an activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// A ticket was bound to a technician.
    Assignment,
    /// A status change or removal.
    Status,
    /// A record was created.
    Creation,
    /// A ticket was completed.
    Completion,
}

/// A single entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier.
    pub id: String,
    /// Human-readable description.
    pub action: String,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// Kind of action.
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

impl Activity {
    /// Creates an activity stamped with the current time.
    pub fn new(action: impl Into<String>, activity_type: ActivityType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            action: action.into(),
            timestamp: Utc::now(),
            activity_type,
        }
    }
}
