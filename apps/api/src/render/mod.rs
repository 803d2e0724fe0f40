//! Template renderer — turns form data into a self-contained HTML document.
//!
//! Rendering is a pure function of its inputs. The generation timestamp is always
//! passed in by the caller; nothing here reads the wall clock.

use thiserror::Error;

pub mod cover_letter;
pub mod resume;
pub mod skeleton;
pub mod template;

pub use cover_letter::render_cover_letter;
pub use resume::render_resume;

/// Separator between contact-line segments.
pub const CONTACT_SEPARATOR: &str = r#"<span class="sep"> | </span>"#;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("field '{field}' is not a usable web link: {value}")]
    InvalidLink { field: &'static str, value: String },

    #[error("template error: {0}")]
    Template(String),
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `<li>` per bullet, in order. An empty slice yields an empty string so the
/// enclosing `<ul>` stays structurally valid.
pub(crate) fn bullet_items<S: AsRef<str>>(bullets: &[S]) -> String {
    bullets
        .iter()
        .map(|b| format!("<li>{}</li>", escape_html(b.as_ref())))
        .collect()
}

/// A web profile shown in the contact line.
pub(crate) struct ProfileLink<'a> {
    pub field: &'static str,
    pub url: Option<&'a str>,
}

/// Builds the contact line: phone, email (as a `mailto:` anchor), then one anchor per
/// present profile link. Absent or blank segments are dropped together with their
/// separator, so the line never has a dangling ` | ` or an empty anchor.
pub(crate) fn contact_line(
    phone: &str,
    email: &str,
    links: &[ProfileLink<'_>],
) -> Result<String, RenderError> {
    let mut segments = Vec::new();

    if !phone.trim().is_empty() {
        segments.push(format!(
            r#"<span class="phone">{}</span>"#,
            escape_html(phone.trim())
        ));
    }

    if !email.trim().is_empty() {
        let email = escape_html(email.trim());
        segments.push(format!(
            r#"<a class="email" href="mailto:{email}">{email}</a>"#
        ));
    }

    for link in links {
        let Some(raw) = link.url.map(str::trim).filter(|u| !u.is_empty()) else {
            continue;
        };
        let href = normalize_link(link.field, raw)?;
        let label = href
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(href.as_str())
            .trim_end_matches('/');
        segments.push(format!(
            r#"<a class="profile-link {}" href="{}">{}</a>"#,
            link.field,
            escape_html(&href),
            escape_html(label)
        ));
    }

    Ok(segments.join(CONTACT_SEPARATOR))
}

/// Accepts `http(s)://` URLs as-is and prefixes bare hosts (`github.com/jane`) with
/// `https://`. Any other scheme (`javascript:`, `file:`) cannot become a safe anchor.
fn normalize_link(field: &'static str, raw: &str) -> Result<String, RenderError> {
    let invalid = || RenderError::InvalidLink {
        field,
        value: raw.to_string(),
    };

    if let Some((scheme, rest)) = raw.split_once("://") {
        let scheme = scheme.to_ascii_lowercase();
        if (scheme == "http" || scheme == "https") && !rest.is_empty() {
            return Ok(raw.to_string());
        }
        return Err(invalid());
    }

    let before_path = raw.split('/').next().unwrap_or(raw);
    if before_path.contains(':') || raw.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(format!("https://{raw}"))
}
