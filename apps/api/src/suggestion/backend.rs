//! Suggestion backends: the LLM-backed default, and a stand-in used when no API key
//! is configured.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::suggestion::prompts::{
    build_bullet_prompt, build_cover_letter_prompt, bullet_system, cover_letter_system,
};
use crate::suggestion::{CoverLetterBrief, SuggestionBackend, SuggestionError, SuggestionKey};

#[derive(Debug, Deserialize)]
struct BulletsPayload {
    bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CoverLetterPayload {
    paragraphs: Vec<String>,
}

impl From<LlmError> for SuggestionError {
    fn from(e: LlmError) -> Self {
        warn!("LLM call failed: {e}");
        SuggestionError::unavailable(e.to_string())
    }
}

#[async_trait]
impl SuggestionBackend for LlmClient {
    async fn suggest_bullets(&self, key: &SuggestionKey) -> Result<Vec<String>, SuggestionError> {
        let payload: BulletsPayload = self
            .call_json(&build_bullet_prompt(key), &bullet_system())
            .await?;
        Ok(payload.bullets)
    }

    async fn draft_cover_letter(
        &self,
        brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError> {
        let payload: CoverLetterPayload = self
            .call_json(&build_cover_letter_prompt(brief), &cover_letter_system())
            .await?;
        Ok(payload.paragraphs)
    }
}

/// Backend for deployments without an API key: every request is unavailable, so
/// exports always fall back to the user's own text.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

#[async_trait]
impl SuggestionBackend for UnavailableBackend {
    async fn suggest_bullets(&self, _key: &SuggestionKey) -> Result<Vec<String>, SuggestionError> {
        Err(SuggestionError::unavailable("no text-generation API key configured"))
    }

    async fn draft_cover_letter(
        &self,
        _brief: &CoverLetterBrief,
    ) -> Result<Vec<String>, SuggestionError> {
        Err(SuggestionError::unavailable("no text-generation API key configured"))
    }
}
