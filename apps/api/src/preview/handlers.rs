use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::preview::document::PreviewDocument;
use crate::preview::export::ExportFormat;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/v1/preview
pub async fn handle_get_preview(State(state): State<AppState>) -> Json<PreviewDocument> {
    Json(state.with_workspace(|ws| ws.preview()))
}

/// GET /api/v1/preview/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Response {
    let exported = state.with_workspace(|ws| ws.export(params.format));
    (
        [(header::CONTENT_TYPE, exported.format.content_type())],
        exported.body,
    )
        .into_response()
}
