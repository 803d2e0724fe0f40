//! Placeholder substitution over fixed HTML skeletons.
//!
//! Placeholders are written `{{ name }}`. Substitution is a single left-to-right pass:
//! substituted values are never rescanned, so user text that happens to contain
//! `{{ ... }}` is emitted verbatim.

use std::collections::HashMap;

use crate::render::escape_html;
use crate::render::RenderError;

/// Flat mapping of placeholder name to the final string spliced into a skeleton.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts user-supplied free text, HTML-escaped.
    pub fn insert_text(&mut self, key: &'static str, value: &str) {
        self.values.insert(key, escape_html(value));
    }

    /// Inserts pre-assembled markup as-is. Callers are responsible for escaping its parts.
    pub fn insert_markup(&mut self, key: &'static str, markup: impl Into<String>) {
        self.values.insert(key, markup.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Fills every placeholder in `skeleton` from `context`.
/// A placeholder without a value is a [`RenderError::Template`].
pub fn fill(skeleton: &str, context: &RenderContext) -> Result<String, RenderError> {
    let mut out = String::with_capacity(skeleton.len() * 2);
    let mut rest = skeleton;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = after_open
            .find("}}")
            .ok_or_else(|| RenderError::Template("unclosed {{ delimiter".to_string()))?;
        let name = after_open[..end].trim();
        let value = context
            .get(name)
            .ok_or_else(|| RenderError::Template(format!("no value for placeholder '{name}'")))?;
        out.push_str(value);
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
