use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportFailure;
use crate::render::RenderError;
use crate::suggestion::SuggestionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("render stage failed: {0}")]
    Render(#[from] RenderError),

    #[error("export stage failed: {0}")]
    Export(#[from] ExportFailure),

    #[error("{0}")]
    Suggestion(#[from] SuggestionError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Suggestion(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Render(e) => {
                tracing::warn!("Render failure: {e}");
                ("RENDER_FAILURE", self.to_string())
            }
            AppError::Export(e) => {
                tracing::error!("Export failure ({}): {}", e.format, e.reason);
                ("EXPORT_FAILURE", self.to_string())
            }
            AppError::Suggestion(e) => {
                tracing::warn!("Suggestion failure: {e}");
                ("SUGGESTION_UNAVAILABLE", self.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
