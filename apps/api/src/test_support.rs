//! Shared fixtures and fakes for unit tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::export::pdf::PdfRenderer;
use crate::export::ExportFailure;
use crate::models::cover_letter::CoverLetterData;
use crate::models::resume::{Education, JobEntry, PersonalInfo, ProjectEntry, ResumeData};
use crate::suggestion::{CoverLetterBrief, SuggestionBackend, SuggestionError, SuggestionKey};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn sample_resume() -> ResumeData {
    let mut skills = BTreeMap::new();
    skills.insert(
        "Languages".to_string(),
        vec!["Rust".to_string(), "Python".to_string(), "SQL".to_string()],
    );
    skills.insert(
        "Tools".to_string(),
        vec!["Docker".to_string(), "PostgreSQL".to_string()],
    );

    ResumeData {
        personal: PersonalInfo {
            name: "Jane Doe".to_string(),
            phone: "(555) 010-2000".to_string(),
            email: "jane@example.com".to_string(),
            linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
            github: Some("https://github.com/janedoe".to_string()),
        },
        education: Education {
            university: "State University".to_string(),
            location: "Springfield, IL".to_string(),
            degree: "B.S. Computer Science".to_string(),
            gpa: Some("3.8".to_string()),
            dates: "2015 - 2019".to_string(),
            bullets: vec!["Dean's List, six semesters".to_string()],
        },
        jobs: vec![
            JobEntry {
                title: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                dates: "2021 - Present".to_string(),
                bullets: vec![
                    "Led migration of billing services to Rust".to_string(),
                    "Cut p99 latency by 30%".to_string(),
                ],
                assist: false,
            },
            JobEntry {
                title: "Software Engineer Intern".to_string(),
                company: "Initech".to_string(),
                location: "Austin, TX".to_string(),
                dates: "Summer 2018".to_string(),
                bullets: vec!["Built internal reporting dashboard".to_string()],
                assist: false,
            },
        ],
        projects: vec![
            ProjectEntry {
                name: "Ledger".to_string(),
                context: "Open source".to_string(),
                date: "2023".to_string(),
                bullets: vec!["Double-entry accounting CLI".to_string()],
                assist: false,
            },
            ProjectEntry {
                name: "Trailhead".to_string(),
                context: "Hackathon".to_string(),
                date: "2019".to_string(),
                bullets: vec!["Route planner for hiking trails".to_string()],
                assist: false,
            },
        ],
        skills,
    }
}

pub fn sample_cover_letter() -> CoverLetterData {
    CoverLetterData {
        sender_name: "Jane Doe".to_string(),
        sender_email: "jane@example.com".to_string(),
        sender_phone: "(555) 010-2000".to_string(),
        company: "Globex Corporation".to_string(),
        role: "Staff Engineer".to_string(),
        hiring_manager: Some("Ms. Rivera".to_string()),
        paragraphs: vec![
            "I am writing to apply for the Staff Engineer position at Globex Corporation."
                .to_string(),
            "At Acme I led the migration of our billing services to Rust.".to_string(),
        ],
        closing: "Sincerely,".to_string(),
        assist: false,
    }
}

/// Returns the same scripted lines for every request, optionally after a delay.
pub struct ScriptedBackend {
    lines: Vec<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(lines: Vec<&str>) -> Self {
        Self {
            lines: lines.into_iter().map(String::from).collect(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<Vec<String>, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.lines.clone())
    }
}

#[async_trait]
impl SuggestionBackend for ScriptedBackend {
    async fn suggest_bullets(&self, _key: &SuggestionKey) -> Result<Vec<String>, SuggestionError> {
        self.respond().await
    }

    async fn draft_cover_letter(
        &self,
        _brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError> {
        self.respond().await
    }
}

#[derive(Default)]
pub struct FailingBackend {
    calls: AtomicUsize,
}

impl FailingBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionBackend for FailingBackend {
    async fn suggest_bullets(&self, _key: &SuggestionKey) -> Result<Vec<String>, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SuggestionError::unavailable("service down"))
    }

    async fn draft_cover_letter(
        &self,
        _brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SuggestionError::unavailable("service down"))
    }
}

pub struct FakePdfRenderer;

#[async_trait]
impl PdfRenderer for FakePdfRenderer {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportFailure> {
        Ok(format!("%PDF-1.4\n% {} bytes of html\n%%EOF\n", html.len()).into_bytes())
    }
}

pub struct FailingPdfRenderer;

#[async_trait]
impl PdfRenderer for FailingPdfRenderer {
    async fn render_pdf(&self, _html: &str) -> Result<Vec<u8>, ExportFailure> {
        Err(ExportFailure::pdf("engine unavailable".to_string()))
    }
}
