//! HTTP protocol definitions for the dispatch console
//!
//! This crate defines the JSON bodies exchanged between the dispatch server
//! and the dashboard: request and response envelopes, the camelCase views of
//! the store's records, and the error codes carried by failed responses.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;
