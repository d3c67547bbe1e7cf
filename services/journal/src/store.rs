//! In-memory entry store
//!
//! The only state in the service: an append-only sequence of entries behind
//! a single reader/writer lock. Lives as long as the process.

use journal_types::entry::{Entry, NewEntry, Timestamp};
use journal_types::stats::JournalStats;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct JournalStore {
    entries: RwLock<Vec<Entry>>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry stamped with the current local time
    pub async fn append(&self, input: NewEntry) -> Entry {
        self.append_with(input, Timestamp::now).await
    }

    /// Append a new entry stamped with `now`
    pub async fn append_at(&self, input: NewEntry, now: Timestamp) -> Entry {
        self.append_with(input, || now).await
    }

    // Clock is read under the write guard so insertion order and `created`
    // order agree. A clock that stepped backwards is clamped to the last
    // entry's timestamp.
    async fn append_with<F>(&self, input: NewEntry, clock: F) -> Entry
    where
        F: FnOnce() -> Timestamp,
    {
        let mut entries = self.entries.write().await;
        let now = clock();
        let created = match entries.last() {
            Some(last) if last.created > now => last.created,
            _ => now,
        };

        let entry = Entry::new(input, created);
        entries.push(entry.clone());
        tracing::debug!(
            title_len = entry.title.len(),
            total = entries.len(),
            "Appended journal entry"
        );
        entry
    }

    /// Copy of every entry, in insertion order
    pub async fn snapshot(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn stats(&self) -> JournalStats {
        JournalStats::from_entries(&self.entries.read().await)
    }
}
