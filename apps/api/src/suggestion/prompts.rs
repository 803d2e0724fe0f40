// Prompt constants for bullet suggestions and cover-letter drafting.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{ATS_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::suggestion::{CoverLetterBrief, SuggestionKey};

/// How many bullets to ask for per job or project.
pub const BULLETS_PER_ENTRY: usize = 3;
/// Paragraph count requested for a drafted cover letter.
pub const COVER_LETTER_PARAGRAPHS: &str = "3-4";

/// Prompt-length guard for pasted job descriptions.
const MAX_JOB_DESCRIPTION_CHARS: usize = 6000;

pub fn bullet_system() -> String {
    format!("You are an expert resume writer. {JSON_ONLY_SYSTEM}")
}

pub fn cover_letter_system() -> String {
    format!("You are an expert career coach who writes concise, professional cover letters. {JSON_ONLY_SYSTEM}")
}

/// Bullet prompt template.
/// Replace: {count}, {role}, {company}, {ats_instruction}, {target_section}
const BULLET_PROMPT_TEMPLATE: &str = r#"Write {count} resume bullet points for the following entry.

ROLE / PROJECT: {role}
COMPANY / CONTEXT: {company}
{target_section}
{ats_instruction}

Return a JSON object with this EXACT schema (no extra fields):
{"bullets": ["Reduced deployment time by 45% by automating the release pipeline"]}"#;

/// Cover-letter prompt template.
/// Replace: {paragraphs}, {role}, {company}, {addressee}, {candidate}, {target_section}
const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write the body of a professional cover letter.

POSITION: {role}
COMPANY: {company}
ADDRESSED TO: {addressee}

CANDIDATE PROFILE:
{candidate}
{target_section}
Requirements:
1. {paragraphs} paragraphs
2. Highlight the candidate's skills most relevant to the position
3. Professional tone, no greeting line and no sign-off (they are added separately)

Return a JSON object with this EXACT schema (no extra fields):
{"paragraphs": ["First paragraph.", "Second paragraph."]}"#;

pub fn build_bullet_prompt(key: &SuggestionKey) -> String {
    BULLET_PROMPT_TEMPLATE
        .replace("{count}", &BULLETS_PER_ENTRY.to_string())
        .replace("{role}", key.role.trim())
        .replace("{company}", key.company.trim())
        .replace("{ats_instruction}", ATS_INSTRUCTION)
        .replace("{target_section}", &target_section(&key.context))
}

pub fn build_cover_letter_prompt(brief: &CoverLetterBrief) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{paragraphs}", COVER_LETTER_PARAGRAPHS)
        .replace("{role}", brief.role.trim())
        .replace("{company}", brief.company.trim())
        .replace(
            "{addressee}",
            brief.hiring_manager.as_deref().unwrap_or("Hiring Manager"),
        )
        .replace("{candidate}", brief.candidate_summary.trim())
        .replace("{target_section}", &target_section(&brief.job_description))
}

/// Empty when no job description was supplied, so the prompt carries no empty header.
fn target_section(job_description: &str) -> String {
    let job_description = job_description.trim();
    if job_description.is_empty() {
        return String::new();
    }
    let truncated: String = job_description
        .chars()
        .take(MAX_JOB_DESCRIPTION_CHARS)
        .collect();
    format!("\nTARGET JOB DESCRIPTION (tailor wording and keywords to it):\n{truncated}\n")
}
