//! HTML → PDF conversion through an external, wkhtmltopdf-compatible engine.
//!
//! Smart shrinking is disabled: content that overflows one page paginates onto a
//! second page instead of being scaled down or cut.

use std::path::PathBuf;
use std::process::Stdio;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::export::ExportFailure;

const PDF_MAGIC: &[u8] = b"%PDF-";
const MAX_STDERR_CHARS: usize = 500;

/// Pluggable PDF backend. Default: [`CommandPdfRenderer`].
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportFailure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Letter,
    A4,
}

impl PageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PageSize::Letter => "Letter",
            PageSize::A4 => "A4",
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            other => Err(format!("unsupported page size '{other}' (expected Letter or A4)")),
        }
    }
}

/// Runs the engine binary as `engine [options] input.html output.pdf` inside a
/// scratch directory that is removed when conversion finishes.
#[derive(Debug, Clone)]
pub struct CommandPdfRenderer {
    program: PathBuf,
    page_size: PageSize,
    timeout: Duration,
}

impl CommandPdfRenderer {
    pub fn new(program: impl Into<PathBuf>, page_size: PageSize, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            page_size,
            timeout,
        }
    }
}

#[async_trait]
impl PdfRenderer for CommandPdfRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportFailure> {
        let scratch = tempfile::tempdir()
            .map_err(|e| ExportFailure::pdf(format!("failed to create scratch directory: {e}")))?;
        let input = scratch.path().join("document.html");
        let output = scratch.path().join("document.pdf");

        tokio::fs::write(&input, html)
            .await
            .map_err(|e| ExportFailure::pdf(format!("failed to stage HTML for conversion: {e}")))?;

        let mut command = Command::new(&self.program);
        command
            .args(["--quiet", "--encoding", "utf-8", "--page-size"])
            .arg(self.page_size.as_str())
            .args([
                "--disable-smart-shrinking",
                "--margin-top",
                "12mm",
                "--margin-bottom",
                "12mm",
                "--margin-left",
                "14mm",
                "--margin-right",
                "14mm",
            ])
            .arg(&input)
            .arg(&output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(
            "Running PDF engine {} (page size {})",
            self.program.display(),
            self.page_size.as_str()
        );

        let result = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                ExportFailure::pdf(format!(
                    "PDF engine did not finish within {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                ExportFailure::pdf(format!(
                    "could not run PDF engine '{}': {e}",
                    self.program.display()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let stderr: String = stderr.trim().chars().take(MAX_STDERR_CHARS).collect();
            return Err(ExportFailure::pdf(format!(
                "PDF engine exited with {}: {}",
                result.status, stderr
            )));
        }

        let bytes = tokio::fs::read(&output)
            .await
            .map_err(|e| ExportFailure::pdf(format!("PDF engine produced no output file: {e}")))?;

        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ExportFailure::pdf(
                "PDF engine output is not a PDF document".to_string(),
            ));
        }

        info!("Converted {} bytes of HTML into {} bytes of PDF", html.len(), bytes.len());
        Ok(bytes)
    }
}
