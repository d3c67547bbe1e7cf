use crate::state::AppState;
use axum::{extract::State, Json};
use journal_types::stats::JournalStats;

pub async fn get_stats(State(state): State<AppState>) -> Json<JournalStats> {
    Json(state.store.stats().await)
}
