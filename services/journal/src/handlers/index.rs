use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Html};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries = state.store.snapshot().await;
    let html = state.renderer.render_index(&state.agent_id, &entries)?;
    Ok(Html(html))
}
