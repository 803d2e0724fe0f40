//! Export pipeline: form data → optional suggestions → merge → render → export.
//!
//! Suggestions are best-effort. A failed suggestion is logged and the entry keeps the
//! user's own bullets; render and export failures abort the request.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::export::{Artifact, ExportFormat, Exporter};
use crate::models::cover_letter::CoverLetterData;
use crate::models::resume::ResumeData;
use crate::render::{render_cover_letter, render_resume};
use crate::suggestion::{CoverLetterBrief, SuggestionClient};

/// Jobs listed in a cover-letter candidate summary.
const SUMMARY_MAX_JOBS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct ResumeExportRequest {
    pub resume: ResumeData,
    pub format: ExportFormat,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterExportRequest {
    pub cover_letter: CoverLetterData,
    /// Optional résumé used to brief the drafting service about the candidate.
    #[serde(default)]
    pub resume: Option<ResumeData>,
    pub format: ExportFormat,
    #[serde(default)]
    pub job_description: Option<String>,
}

pub async fn export_resume(
    suggestions: &SuggestionClient,
    exporter: &Exporter,
    request: ResumeExportRequest,
    at: DateTime<Utc>,
) -> Result<Artifact, AppError> {
    if request.format == ExportFormat::Text {
        return Err(AppError::Validation(
            "plain-text export is only available for cover letters".to_string(),
        ));
    }

    let job_description = request.job_description.as_deref().unwrap_or("").trim();
    let resume = apply_suggestions(suggestions, request.resume, job_description).await;

    let html = render_resume(&resume, at)?;
    let artifact = exporter
        .export(&html, request.format, &resume.personal.name, at)
        .await?;

    info!("Résumé export ready: {}", artifact.filename);
    Ok(artifact)
}

pub async fn export_cover_letter(
    suggestions: &SuggestionClient,
    exporter: &Exporter,
    request: CoverLetterExportRequest,
    at: DateTime<Utc>,
) -> Result<Artifact, AppError> {
    let mut letter = request.cover_letter;

    if letter.assist {
        let brief = CoverLetterBrief {
            role: letter.role.clone(),
            company: letter.company.clone(),
            hiring_manager: letter.hiring_manager.clone(),
            candidate_summary: candidate_summary(&letter, request.resume.as_ref()),
            job_description: request.job_description.unwrap_or_default(),
        };

        match suggestions.draft_cover_letter(&brief).await {
            Ok(paragraphs) => {
                info!("Drafted {} cover-letter paragraphs", paragraphs.len());
                letter.paragraphs = paragraphs;
            }
            Err(e) => warn!("Keeping user-written cover letter: {e}"),
        }
    }

    let html = render_cover_letter(&letter, at)?;
    let artifact = exporter
        .export(&html, request.format, &letter.sender_name, at)
        .await?;

    info!("Cover letter export ready: {}", artifact.filename);
    Ok(artifact)
}

/// Replaces the bullets of every assisted entry with suggestions, one entry at a time.
/// Entries without a role or name are left alone since there is nothing to prompt on.
async fn apply_suggestions(
    suggestions: &SuggestionClient,
    mut resume: ResumeData,
    job_description: &str,
) -> ResumeData {
    for job in resume.jobs.iter_mut().filter(|j| j.assist) {
        if job.title.trim().is_empty() {
            continue;
        }
        match suggestions
            .suggest(job.title.trim(), job.company.trim(), job_description)
            .await
        {
            Ok(bullets) => job.bullets = bullets,
            Err(e) => warn!("Keeping user bullets for '{}': {e}", job.title.trim()),
        }
    }

    for project in resume.projects.iter_mut().filter(|p| p.assist) {
        if project.name.trim().is_empty() {
            continue;
        }
        match suggestions
            .suggest(project.name.trim(), project.context.trim(), job_description)
            .await
        {
            Ok(bullets) => project.bullets = bullets,
            Err(e) => warn!("Keeping user bullets for '{}': {e}", project.name.trim()),
        }
    }

    resume
}

fn candidate_summary(letter: &CoverLetterData, resume: Option<&ResumeData>) -> String {
    let Some(resume) = resume else {
        return letter.sender_name.trim().to_string();
    };

    let mut lines = vec![resume.personal.name.trim().to_string()];

    let degree = resume.education.degree.trim();
    if !degree.is_empty() {
        lines.push(format!(
            "Education: {degree}, {}",
            resume.education.university.trim()
        ));
    }

    for job in resume
        .jobs
        .iter()
        .filter(|j| !j.title.trim().is_empty())
        .take(SUMMARY_MAX_JOBS)
    {
        lines.push(format!("{} at {}", job.title.trim(), job.company.trim()));
    }

    for (category, skills) in &resume.skills {
        if !skills.is_empty() {
            lines.push(format!("{category}: {}", skills.join(", ")));
        }
    }

    lines.retain(|line| !line.is_empty());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::test_support::{
        fixed_instant, sample_cover_letter, sample_resume, FailingBackend, FailingPdfRenderer,
        FakePdfRenderer, ScriptedBackend,
    };

    const TIMEOUT: Duration = Duration::from_secs(20);

    fn exporter() -> Exporter {
        Exporter::new(Arc::new(FakePdfRenderer))
    }

    fn html_of(artifact: &Artifact) -> &str {
        std::str::from_utf8(&artifact.bytes).unwrap()
    }

    #[tokio::test]
    async fn test_failed_suggestion_keeps_user_bullets() {
        let backend = Arc::new(FailingBackend::default());
        let client = SuggestionClient::new(backend.clone(), TIMEOUT);
        let mut resume = sample_resume();
        resume.jobs[0].assist = true;

        let artifact = export_resume(
            &client,
            &exporter(),
            ResumeExportRequest {
                resume,
                format: ExportFormat::Html,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap();

        assert_eq!(backend.calls(), 1);
        assert!(html_of(&artifact).contains("<li>Led migration of billing services to Rust</li>"));
    }

    #[tokio::test]
    async fn test_successful_suggestion_replaces_only_assisted_entry() {
        let backend = Arc::new(ScriptedBackend::new(vec!["- Scaled checkout to 10k rps"]));
        let client = SuggestionClient::new(backend.clone(), TIMEOUT);
        let mut resume = sample_resume();
        resume.jobs[0].assist = true;

        let artifact = export_resume(
            &client,
            &exporter(),
            ResumeExportRequest {
                resume,
                format: ExportFormat::Html,
                job_description: Some("Payments platform role".to_string()),
            },
            fixed_instant(),
        )
        .await
        .unwrap();

        let html = html_of(&artifact);
        assert_eq!(backend.calls(), 1);
        assert!(html.contains("<li>Scaled checkout to 10k rps</li>"));
        assert!(!html.contains("Cut p99 latency by 30%"));
        assert!(html.contains("<li>Built internal reporting dashboard</li>"));
    }

    #[tokio::test]
    async fn test_assisted_entry_without_role_is_not_sent() {
        let backend = Arc::new(ScriptedBackend::new(vec!["unused"]));
        let client = SuggestionClient::new(backend.clone(), TIMEOUT);
        let mut resume = sample_resume();
        resume.projects[1].name = "  ".to_string();
        resume.projects[1].assist = true;

        export_resume(
            &client,
            &exporter(),
            ResumeExportRequest {
                resume,
                format: ExportFormat::Pdf,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap();

        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_resume_text_export_is_rejected() {
        let client = SuggestionClient::new(Arc::new(FailingBackend::default()), TIMEOUT);

        let err = export_resume(
            &client,
            &exporter(),
            ResumeExportRequest {
                resume: sample_resume(),
                format: ExportFormat::Text,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_name_surfaces_render_stage() {
        let client = SuggestionClient::new(Arc::new(FailingBackend::default()), TIMEOUT);
        let mut resume = sample_resume();
        resume.personal.name.clear();

        let err = export_resume(
            &client,
            &exporter(),
            ResumeExportRequest {
                resume,
                format: ExportFormat::Pdf,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Render(_)));
    }

    #[tokio::test]
    async fn test_pdf_failure_surfaces_export_stage() {
        let client = SuggestionClient::new(Arc::new(FailingBackend::default()), TIMEOUT);

        let err = export_resume(
            &client,
            &Exporter::new(Arc::new(FailingPdfRenderer)),
            ResumeExportRequest {
                resume: sample_resume(),
                format: ExportFormat::Pdf,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().starts_with("export stage failed: PDF export failed"));
    }

    #[tokio::test]
    async fn test_cover_letter_draft_replaces_paragraphs() {
        let backend = Arc::new(ScriptedBackend::new(vec!["Drafted opening.", "Drafted close."]));
        let client = SuggestionClient::new(backend.clone(), TIMEOUT);
        let mut letter = sample_cover_letter();
        letter.assist = true;

        let artifact = export_cover_letter(
            &client,
            &exporter(),
            CoverLetterExportRequest {
                cover_letter: letter,
                resume: Some(sample_resume()),
                format: ExportFormat::Text,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap();

        let text = html_of(&artifact);
        assert!(text.contains("Drafted opening.\n\nDrafted close."));
        assert!(!text.contains("I am writing to apply"));
        assert_eq!(artifact.filename, "Jane_Doe_20250101_120000.txt");
    }

    #[tokio::test]
    async fn test_cover_letter_falls_back_when_drafting_fails() {
        let client = SuggestionClient::new(Arc::new(FailingBackend::default()), TIMEOUT);
        let mut letter = sample_cover_letter();
        letter.assist = true;

        let artifact = export_cover_letter(
            &client,
            &exporter(),
            CoverLetterExportRequest {
                cover_letter: letter,
                resume: None,
                format: ExportFormat::Html,
                job_description: None,
            },
            fixed_instant(),
        )
        .await
        .unwrap();

        assert!(html_of(&artifact).contains("<p>I am writing to apply"));
    }

    #[test]
    fn test_candidate_summary_from_resume() {
        let summary = candidate_summary(&sample_cover_letter(), Some(&sample_resume()));

        assert!(summary.starts_with("Jane Doe\n"));
        assert!(summary.contains("Senior Engineer at Acme"));
        assert!(summary.contains("Languages: Rust, Python, SQL"));
    }

    #[test]
    fn test_candidate_summary_without_resume_is_sender_name() {
        assert_eq!(candidate_summary(&sample_cover_letter(), None), "Jane Doe");
    }
}
