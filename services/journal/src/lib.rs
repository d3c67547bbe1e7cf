//! In-memory journal service
//!
//! Stores journal entries (title, body, creation time) in process memory and
//! serves them over HTTP:
//!
//! | Method | Path       | Response                                  |
//! |--------|------------|-------------------------------------------|
//! | GET    | `/`        | HTML listing, newest first                |
//! | GET    | `/stats`   | `{total_entries, most_recent_entry}`      |
//! | GET    | `/health`  | `{status: "ok", agent}`                   |
//! | POST   | `/entries` | created `{title, body, created}`          |
//! | GET    | `/entries` | every entry in insertion order            |
//!
//! State is lost when the process exits.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;
pub use store::JournalStore;

// Service version
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
