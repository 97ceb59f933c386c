//! Core record definitions for the dispatch console.
//!
//! This crate defines the data types shared by the store, the wire protocol
//! and the server: technicians, service tickets, the activity log and the
//! dispatcher's session.

mod activity;
mod session;
mod technician;
mod ticket;

pub use activity::*;
pub use session::*;
pub use technician::*;
pub use ticket::*;
