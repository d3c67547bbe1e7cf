//! Journal summary

use crate::entry::{Entry, Timestamp};
use serde::{Deserialize, Serialize};

/// Summary of the journal contents
///
/// `most_recent_entry` is the latest `created` value across all entries,
/// `None` for an empty journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalStats {
    pub total_entries: usize,
    pub most_recent_entry: Option<Timestamp>,
}

impl JournalStats {
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            total_entries: entries.len(),
            most_recent_entry: entries.iter().map(|e| e.created).max(),
        }
    }
}
