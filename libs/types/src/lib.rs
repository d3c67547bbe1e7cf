//! Types library for the journal service
//!
//! Shared record shapes for the journal: what a caller submits, what the
//! service stores, and what the summary endpoints report. Nothing in here
//! knows about HTTP.
//!
//! # Modules
//! - `entry`: Entry records and their server-assigned timestamp
//! - `stats`: Summary over the stored entries
//! - `errors`: Field-level validation errors

pub mod entry;
pub mod errors;
pub mod stats;
