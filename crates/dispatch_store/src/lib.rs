//! Application state store for the dispatch console.
//!
//! This crate owns the technician roster, the service tickets, the activity
//! log and the dispatcher session. Every mutation keeps the denormalized
//! fields (assignee name, active-job counts) in step, appends to the activity
//! log where appropriate, and notifies subscribers through [`StoreEvent`]s.

mod error;
mod events;
mod memory;
pub mod seed;
mod stats;
mod traits;

pub use error::*;
pub use events::*;
pub use memory::*;
pub use stats::*;
pub use traits::*;

/// Number of entries the activity log keeps.
pub const ACTIVITY_LOG_CAPACITY: usize = 20;
