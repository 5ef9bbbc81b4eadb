use axum::{extract::State, Json};

use crate::resume::ResumeStore;
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeStore> {
    Json(state.with_workspace(|ws| ws.snapshot()))
}

/// DELETE /api/v1/resume
pub async fn handle_clear_resume(State(state): State<AppState>) -> Json<ResumeStore> {
    Json(state.with_workspace(|ws| {
        ws.clear_resume();
        ws.snapshot()
    }))
}
