//! Axum route handlers for the export and suggestion API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::filename::attachment_disposition;
use crate::export::Artifact;
use crate::generation::orchestrator::{
    export_cover_letter, export_resume, CoverLetterExportRequest, ResumeExportRequest,
};
use crate::state::AppState;

const EXPORT_ID_HEADER: &str = "x-export-id";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub bullets: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/export
///
/// Runs the full pipeline and returns the artifact as an attachment.
pub async fn handle_export_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let artifact =
        export_resume(&state.suggestions, &state.exporter, request, Utc::now()).await?;
    Ok(artifact_response(artifact))
}

/// POST /api/v1/cover-letters/export
pub async fn handle_export_cover_letter(
    State(state): State<AppState>,
    payload: Result<Json<CoverLetterExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let artifact =
        export_cover_letter(&state.suggestions, &state.exporter, request, Utc::now()).await?;
    Ok(artifact_response(artifact))
}

/// POST /api/v1/suggestions
///
/// Direct preview of suggested bullets. There is no fallback text here, so an
/// unavailable service is reported to the caller.
pub async fn handle_suggest(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, AppError> {
    let Json(request) = payload?;
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let bullets = state
        .suggestions
        .suggest(role, request.company.trim(), request.context.trim())
        .await?;

    Ok(Json(SuggestResponse { bullets }))
}

fn artifact_response(artifact: Artifact) -> Response {
    let export_id = Uuid::new_v4();
    info!(
        "Serving export {export_id}: {} ({} bytes)",
        artifact.filename,
        artifact.bytes.len()
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&artifact.filename),
            ),
            (
                HeaderName::from_static(EXPORT_ID_HEADER),
                export_id.to_string(),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}
