//! HTML → plain text for cover-letter downloads.
//!
//! Markup is dropped, entities decoded and whitespace collapsed. Block elements end a
//! paragraph (emitted as a blank line); `<br>` and `<li>` end a line. Contents of
//! `<head>`, `<style>`, `<script>` and `<title>` are discarded.

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer", "section", "article",
    "ul", "ol", "table", "tr", "blockquote", "body",
];
const LINE_TAGS: &[&str] = &["br", "li"];
const SKIPPED_TAGS: &[&str] = &["head", "style", "script", "title"];

pub fn html_to_text(html: &str) -> String {
    let mut builder = TextBuilder::default();
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        builder.push_text(&rest[..lt]);
        rest = &rest[lt..];

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map(|end| &after[end + 3..]).unwrap_or("");
            continue;
        }

        let Some(gt) = rest.find('>') else {
            // A lone '<' is text.
            builder.push_text(rest);
            rest = "";
            break;
        };
        let tag = &rest[1..gt];
        rest = &rest[gt + 1..];

        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if !closing && SKIPPED_TAGS.contains(&name.as_str()) {
            rest = skip_element(rest, &name);
        } else if BLOCK_TAGS.contains(&name.as_str()) {
            builder.paragraph_break();
        } else if LINE_TAGS.contains(&name.as_str()) {
            builder.line_break();
        }
    }
    builder.push_text(rest);

    builder.finish()
}

/// Returns the input after the matching `</name>`, or empty if it never closes.
fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing = format!("</{name}");
    let lower = rest.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(pos) => match rest[pos..].find('>') {
            Some(gt) => &rest[pos + gt + 1..],
            None => "",
        },
        None => "",
    }
}

#[derive(Default)]
struct TextBuilder {
    paragraphs: Vec<String>,
    lines: Vec<String>,
    line: String,
}

impl TextBuilder {
    fn push_text(&mut self, raw: &str) {
        self.line.push_str(raw);
    }

    fn line_break(&mut self) {
        let text = collapse_whitespace(&decode_entities(&self.line));
        if !text.is_empty() {
            self.lines.push(text);
        }
        self.line.clear();
    }

    fn paragraph_break(&mut self) {
        self.line_break();
        if !self.lines.is_empty() {
            self.paragraphs.push(self.lines.join("\n"));
            self.lines.clear();
        }
    }

    fn finish(mut self) -> String {
        self.paragraph_break();
        if self.paragraphs.is_empty() {
            return String::new();
        }
        let mut text = self.paragraphs.join("\n\n");
        text.push('\n');
        text
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&rest[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_blank_line_separated() {
        let html = "<p>First   paragraph\n  wraps.</p><p>Second.</p>";
        assert_eq!(html_to_text(html), "First paragraph wraps.\n\nSecond.\n");
    }

    #[test]
    fn test_head_style_and_script_are_dropped() {
        let html = "<html><head><title>T</title><style>p { color: red; }</style></head>\
                    <body><script>alert(1)</script><p>Visible</p></body></html>";
        assert_eq!(html_to_text(html), "Visible\n");
    }

    #[test]
    fn test_entities_are_decoded_once() {
        let html = "<p>R&amp;D &lt;team&gt; &#39;quoted&#39; &amp;lt; &#x41;</p>";
        assert_eq!(html_to_text(html), "R&D <team> 'quoted' &lt; A\n");
    }

    #[test]
    fn test_br_keeps_lines_inside_a_paragraph() {
        let html = "<p class=\"closing\">Sincerely,<br>Jane Doe</p>";
        assert_eq!(html_to_text(html), "Sincerely,\nJane Doe\n");
    }

    #[test]
    fn test_comments_and_unknown_entities_survive_sanely() {
        let html = "<p>A <!-- hidden --> B &unknown; C & D</p>";
        assert_eq!(html_to_text(html), "A B &unknown; C & D\n");
    }

    #[test]
    fn test_markup_free_document_is_empty() {
        assert_eq!(html_to_text("<html><head><title>x</title></head><body></body></html>"), "");
    }

    #[test]
    fn test_rendered_cover_letter_converts_to_prose() {
        use crate::render::render_cover_letter;
        use crate::test_support::{fixed_instant, sample_cover_letter};

        let html = render_cover_letter(&sample_cover_letter(), fixed_instant()).unwrap();
        let text = html_to_text(&html);

        assert!(!text.contains('<'));
        assert!(!text.contains("font-family"));
        assert!(text.starts_with("Jane Doe\n\n"));
        assert!(text.contains("Dear Ms. Rivera,\n\nI am writing to apply"));
        assert!(text.trim_end().ends_with("Sincerely,\nJane Doe"));
    }
}
