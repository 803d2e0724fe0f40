use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::cover_letter::CoverLetterData;
use crate::render::skeleton::{COVER_LETTER_SKELETON, STYLESHEET};
use crate::render::template::{fill, RenderContext};
use crate::render::{contact_line, escape_html, RenderError};

/// Renders a cover letter into a complete HTML document, one `<p>` per body paragraph.
/// The letter date is taken from `generated_at`.
pub fn render_cover_letter(
    letter: &CoverLetterData,
    generated_at: DateTime<Utc>,
) -> Result<String, RenderError> {
    let letter = letter.normalized();
    if letter.sender_name.is_empty() {
        return Err(RenderError::MissingField("sender_name"));
    }

    let mut ctx = RenderContext::new();
    ctx.insert_text(
        "generated_at",
        &generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );
    ctx.insert_markup("stylesheet", STYLESHEET);
    ctx.insert_text("sender_name", &letter.sender_name);
    ctx.insert_markup(
        "contact_line",
        contact_line(&letter.sender_phone, &letter.sender_email, &[])?,
    );
    ctx.insert_text("letter_date", &generated_at.format("%B %-d, %Y").to_string());
    ctx.insert_markup("recipient", recipient_block(&letter));
    ctx.insert_text("salutation", letter.salutation_name());
    ctx.insert_markup(
        "body",
        letter
            .paragraphs
            .iter()
            .map(|p| format!("<p>{}</p>\n", escape_html(p)))
            .collect::<String>(),
    );
    ctx.insert_text("closing", &letter.closing);

    fill(COVER_LETTER_SKELETON, &ctx)
}

fn recipient_block(letter: &CoverLetterData) -> String {
    let mut lines = Vec::new();
    if !letter.company.is_empty() {
        lines.push(escape_html(&letter.company));
    }
    if !letter.role.is_empty() {
        lines.push(format!("Re: Application for {}", escape_html(&letter.role)));
    }
    lines.join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed_instant, sample_cover_letter};

    #[test]
    fn test_cover_letter_renders_paragraphs_in_order() {
        let html = render_cover_letter(&sample_cover_letter(), fixed_instant()).unwrap();

        let first = html.find("<p>I am writing to apply").unwrap();
        let second = html.find("<p>At Acme I led").unwrap();
        assert!(first < second);
        assert!(html.contains("<p class=\"date\">January 1, 2025</p>"));
        assert!(html.contains("Dear Ms. Rivera,"));
        assert!(html.contains("Globex Corporation<br>Re: Application for Staff Engineer"));
    }

    #[test]
    fn test_cover_letter_is_deterministic() {
        let letter = sample_cover_letter();
        assert_eq!(
            render_cover_letter(&letter, fixed_instant()).unwrap(),
            render_cover_letter(&letter, fixed_instant()).unwrap()
        );
    }

    #[test]
    fn test_cover_letter_escapes_paragraphs() {
        let mut letter = sample_cover_letter();
        letter.paragraphs = vec!["Fluent in <b>C++</b> & Rust".to_string()];

        let html = render_cover_letter(&letter, fixed_instant()).unwrap();

        assert!(html.contains("<p>Fluent in &lt;b&gt;C++&lt;/b&gt; &amp; Rust</p>"));
    }

    #[test]
    fn test_cover_letter_without_sender_fails() {
        let mut letter = sample_cover_letter();
        letter.sender_name.clear();

        let err = render_cover_letter(&letter, fixed_instant()).unwrap_err();

        assert!(matches!(err, RenderError::MissingField("sender_name")));
    }

    #[test]
    fn test_cover_letter_without_company_or_role_has_empty_recipient() {
        let mut letter = sample_cover_letter();
        letter.company.clear();
        letter.role.clear();

        let html = render_cover_letter(&letter, fixed_instant()).unwrap();

        assert!(html.contains(r#"<p class="recipient"></p>"#));
    }
}
