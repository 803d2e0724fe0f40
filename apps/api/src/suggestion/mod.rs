//! Content suggestion client — best-effort AI phrasing of bullets and cover letters.
//!
//! One `SuggestionClient` is built per process and shared through `AppState`. It owns
//! the session cache: identical (role, company, context) requests cost at most one
//! remote call. Concurrent identical requests wait on the same in-flight call.
//! Failures are never cached.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

pub mod backend;
pub mod prompts;

pub use backend::UnavailableBackend;

/// Retries after a timed-out attempt before giving up.
const TIMEOUT_RETRIES: u32 = 1;

#[derive(Debug, Clone, Error)]
pub enum SuggestionError {
    #[error("suggestion unavailable: {reason}")]
    Unavailable { reason: String },
}

impl SuggestionError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        SuggestionError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Cache key: the exact triple a suggestion was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionKey {
    pub role: String,
    /// Company for jobs, project context for projects.
    pub company: String,
    /// Target job description; may be empty.
    pub context: String,
}

impl SuggestionKey {
    pub fn new(role: &str, company: &str, context: &str) -> Self {
        Self {
            role: role.to_string(),
            company: company.to_string(),
            context: context.to_string(),
        }
    }
}

/// What the backend needs to draft a cover-letter body.
#[derive(Debug, Clone)]
pub struct CoverLetterBrief {
    pub role: String,
    pub company: String,
    pub hiring_manager: Option<String>,
    pub candidate_summary: String,
    pub job_description: String,
}

/// The remote text-generation service, seen as an opaque collaborator.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn suggest_bullets(&self, key: &SuggestionKey) -> Result<Vec<String>, SuggestionError>;

    async fn draft_cover_letter(
        &self,
        brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError>;
}

type CacheSlot = Arc<OnceCell<Vec<String>>>;

pub struct SuggestionClient {
    backend: Arc<dyn SuggestionBackend>,
    cache: Mutex<HashMap<SuggestionKey, CacheSlot>>,
    timeout: Duration,
}

impl SuggestionClient {
    pub fn new(backend: Arc<dyn SuggestionBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            cache: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    /// Returns suggested bullets for `role` at `company`, tailored to `context`.
    ///
    /// A cache hit returns the previously generated list unchanged and makes no call.
    pub async fn suggest(
        &self,
        role: &str,
        company: &str,
        context: &str,
    ) -> Result<Vec<String>, SuggestionError> {
        let key = SuggestionKey::new(role, company, context);
        let slot = self.slot_for(&key);

        if let Some(bullets) = slot.get() {
            debug!("Suggestion cache hit for '{}' at '{}'", key.role, key.company);
            return Ok(bullets.clone());
        }

        let bullets = slot
            .get_or_try_init(|| async {
                let raw = self
                    .with_timeout(|| self.backend.suggest_bullets(&key))
                    .await?;
                let bullets = normalize_suggestions(raw);
                if bullets.is_empty() {
                    return Err(SuggestionError::unavailable("service returned no bullets"));
                }
                info!(
                    "Cached {} suggested bullets for '{}' at '{}'",
                    bullets.len(),
                    key.role,
                    key.company
                );
                Ok(bullets)
            })
            .await?;

        Ok(bullets.clone())
    }

    /// Drafts cover-letter body paragraphs. Not cached: each draft is a fresh request.
    pub async fn draft_cover_letter(
        &self,
        brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError> {
        let raw = self
            .with_timeout(|| self.backend.draft_cover_letter(brief))
            .await?;
        let paragraphs = normalize_suggestions(raw);
        if paragraphs.is_empty() {
            return Err(SuggestionError::unavailable("service returned no paragraphs"));
        }
        Ok(paragraphs)
    }

    fn slot_for(&self, key: &SuggestionKey) -> CacheSlot {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.entry(key.clone()).or_default().clone()
    }

    /// Bounds each attempt by the client timeout; a timed-out attempt is retried
    /// `TIMEOUT_RETRIES` times. Backend errors are returned immediately.
    async fn with_timeout<F, Fut>(&self, mut attempt: F) -> Result<Vec<String>, SuggestionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Vec<String>, SuggestionError>>,
    {
        for round in 0..=TIMEOUT_RETRIES {
            match tokio::time::timeout(self.timeout, attempt()).await {
                Ok(result) => return result,
                Err(_) => warn!(
                    "Suggestion request timed out after {}ms (attempt {}/{})",
                    self.timeout.as_millis(),
                    round + 1,
                    TIMEOUT_RETRIES + 1
                ),
            }
        }

        Err(SuggestionError::unavailable(format!(
            "timed out after {} attempts",
            TIMEOUT_RETRIES + 1
        )))
    }
}

/// Trims, strips leading list markers ("-", "*", "•", "1.") and drops blank lines.
pub fn normalize_suggestions(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|line| strip_list_marker(line.trim()).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix('•'))
    {
        return rest;
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let after = &line[digits..];
        if let Some(rest) = after.strip_prefix(". ").or_else(|| after.strip_prefix(") ")) {
            return rest;
        }
    }

    line
}
