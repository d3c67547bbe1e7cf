use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Liveness probe
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(&state.agent_id))
}
