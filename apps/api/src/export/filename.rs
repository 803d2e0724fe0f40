//! Artifact filename convention: `{sanitizedBaseName}_{YYYYMMDD_HHMMSS}.{ext}`.

use chrono::{DateTime, Utc};

use crate::export::ExportFormat;

/// Longest base name kept, in characters.
pub const MAX_BASE_NAME_CHARS: usize = 50;
const FALLBACK_BASE_NAME: &str = "resume";

/// Keeps letters, digits, `_` and `-` from the first line of `name`; every other
/// character becomes `_`. Empty input falls back to `resume`.
pub fn sanitize_base_name(name: &str) -> String {
    let first_line = name.lines().next().unwrap_or_default().trim();
    let sanitized: String = first_line
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_BASE_NAME_CHARS)
        .collect();

    if sanitized.is_empty() {
        FALLBACK_BASE_NAME.to_string()
    } else {
        sanitized
    }
}

pub fn artifact_filename(base_name: &str, at: DateTime<Utc>, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        sanitize_base_name(base_name),
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// `Content-Disposition` value for downloading `filename`.
///
/// `filename=` carries an ASCII-only fallback (non-ASCII characters become `_`);
/// `filename*=` carries the exact name, percent-encoded per RFC 5987.
pub fn attachment_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
