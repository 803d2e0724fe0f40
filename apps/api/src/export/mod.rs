//! Export adapter — turns a rendered HTML document into a downloadable artifact.
//!
//! Every failure is an [`ExportFailure`] naming the attempted format; an export never
//! yields an empty file.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub mod filename;
pub mod pdf;
pub mod text;

use crate::export::filename::artifact_filename;
use crate::export::pdf::PdfRenderer;
use crate::export::text::html_to_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Html,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Html => "HTML",
            ExportFormat::Text => "TEXT",
        })
    }
}

#[derive(Debug, Error)]
#[error("{format} export failed: {reason}")]
pub struct ExportFailure {
    pub format: ExportFormat,
    pub reason: String,
}

impl ExportFailure {
    pub fn new(format: ExportFormat, reason: impl Into<String>) -> Self {
        Self {
            format,
            reason: reason.into(),
        }
    }

    pub fn pdf(reason: String) -> Self {
        Self::new(ExportFormat::Pdf, reason)
    }
}

/// A finished download: bytes plus the name the user should save it under.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub bytes: Bytes,
    pub filename: String,
    pub format: ExportFormat,
}

#[derive(Clone)]
pub struct Exporter {
    pdf: Arc<dyn PdfRenderer>,
}

impl Exporter {
    pub fn new(pdf: Arc<dyn PdfRenderer>) -> Self {
        Self { pdf }
    }

    /// Converts `html` into `format` and names the result after `base_name` and `at`.
    pub async fn export(
        &self,
        html: &str,
        format: ExportFormat,
        base_name: &str,
        at: DateTime<Utc>,
    ) -> Result<Artifact, ExportFailure> {
        ensure_html_document(html, format)?;

        let bytes = match format {
            ExportFormat::Html => Bytes::copy_from_slice(html.as_bytes()),
            ExportFormat::Text => {
                let text = html_to_text(html);
                if text.is_empty() {
                    return Err(ExportFailure::new(format, "document has no text content"));
                }
                Bytes::from(text)
            }
            ExportFormat::Pdf => Bytes::from(self.pdf.render_pdf(html).await?),
        };

        let filename = artifact_filename(base_name, at, format);
        info!("Exported {} ({} bytes)", filename, bytes.len());

        Ok(Artifact {
            bytes,
            filename,
            format,
        })
    }
}

fn ensure_html_document(html: &str, format: ExportFormat) -> Result<(), ExportFailure> {
    let lower = html.trim_start().to_ascii_lowercase();
    if lower.starts_with("<!doctype html") || lower.starts_with("<html") {
        Ok(())
    } else {
        Err(ExportFailure::new(format, "input is not an HTML document"))
    }
}
