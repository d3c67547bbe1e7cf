use crate::models::CreateEntryRequest;
use crate::state::AppState;
use axum::{extract::State, Json};
use journal_types::entry::Entry;

/// Append an entry; validation failures are rejected by the extractor
pub async fn create_entry(
    State(state): State<AppState>,
    CreateEntryRequest(input): CreateEntryRequest,
) -> Json<Entry> {
    Json(state.store.append(input).await)
}

/// All entries in insertion order
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.store.snapshot().await)
}
