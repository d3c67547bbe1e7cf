use crate::handlers::{entries, health, index, stats};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/stats", get(stats::get_stats))
        .route("/health", get(health::health))
        .route(
            "/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
