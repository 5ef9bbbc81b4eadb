use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::editor::{BufferedSlotEditor, ComposeTarget, EditorView, Transition};
use crate::errors::AppError;
use crate::resume::SectionKey;
use crate::state::AppState;
use crate::workspace::Workspace;

#[derive(Serialize)]
pub struct EditorResponse {
    pub transition: Transition,
    pub view: EditorView,
}

#[derive(Deserialize)]
pub struct ComposeRequest {
    pub target: ComposeTarget,
}

#[derive(Deserialize)]
pub struct FieldValueRequest {
    pub value: String,
}

fn parse_section(raw: &str) -> Result<SectionKey, AppError> {
    raw.parse().map_err(AppError::NotFound)
}

fn respond(ws: &Workspace, key: SectionKey, transition: Transition) -> Json<EditorResponse> {
    if let Transition::Ignored(reason) = transition {
        warn!("{key}: operation ignored ({reason:?})");
    }
    Json(EditorResponse {
        transition,
        view: ws.editor(key).view(),
    })
}

/// Runs a list-only operation; the scalar section has no list view.
fn with_list_editor(
    state: &AppState,
    key: SectionKey,
    op: impl FnOnce(&mut BufferedSlotEditor) -> Transition,
) -> Result<Json<EditorResponse>, AppError> {
    state.with_workspace(|ws| -> Result<Json<EditorResponse>, AppError> {
        let editor = ws.list_editor_mut(key).ok_or_else(|| {
            AppError::Validation(format!("Section '{key}' is edited live and has no list"))
        })?;
        let transition = op(editor);
        Ok(respond(ws, key, transition))
    })
}

/// GET /api/v1/sections
pub async fn handle_list_sections(State(state): State<AppState>) -> Json<Vec<EditorView>> {
    Json(state.with_workspace(|ws| ws.views()))
}

/// GET /api/v1/sections/:section
pub async fn handle_get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<EditorView>, AppError> {
    let key = parse_section(&section)?;
    Ok(Json(state.with_workspace(|ws| ws.editor(key).view())))
}

/// POST /api/v1/sections/:section/toggle
pub async fn handle_toggle(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<EditorResponse>, AppError> {
    let key = parse_section(&section)?;
    Ok(state.with_workspace(|ws| {
        let transition = ws.editor_mut(key).toggle();
        respond(ws, key, transition)
    }))
}

/// POST /api/v1/sections/:section/compose
pub async fn handle_compose(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(req): Json<ComposeRequest>,
) -> Result<Json<EditorResponse>, AppError> {
    let key = parse_section(&section)?;
    with_list_editor(&state, key, |editor| editor.start_compose(req.target))
}

/// PUT /api/v1/sections/:section/fields/:index
pub async fn handle_edit_field(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, usize)>,
    Json(req): Json<FieldValueRequest>,
) -> Result<Json<EditorResponse>, AppError> {
    let key = parse_section(&section)?;
    Ok(state.with_workspace(|ws| {
        let transition = ws.editor_mut(key).edit_field(index, req.value);
        respond(ws, key, transition)
    }))
}

/// POST /api/v1/sections/:section/commit
pub async fn handle_commit(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<EditorResponse>, AppError> {
    let key = parse_section(&section)?;
    with_list_editor(&state, key, |editor| editor.commit())
}

/// DELETE /api/v1/sections/:section/items/:id
pub async fn handle_delete_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, Uuid)>,
) -> Result<Json<EditorResponse>, AppError> {
    let key = parse_section(&section)?;
    with_list_editor(&state, key, |editor| editor.delete_item(id.into()))
}
