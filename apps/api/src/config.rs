use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::export::pdf::PageSize;
use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; without `ANTHROPIC_API_KEY` suggestions are disabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub pdf_engine: String,
    pub pdf_page_size: PageSize,
    pub pdf_timeout: Duration,
    pub suggestion_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: env_or("ANTHROPIC_API_URL", DEFAULT_API_URL),
            pdf_engine: env_or("PDF_ENGINE", "wkhtmltopdf"),
            pdf_page_size: env_or("PDF_PAGE_SIZE", "Letter")
                .parse::<PageSize>()
                .map_err(|e: String| anyhow!(e))
                .context("PDF_PAGE_SIZE must be Letter or A4")?,
            pdf_timeout: secs_env("PDF_TIMEOUT_SECS", 60)?,
            suggestion_timeout: secs_env("SUGGESTION_TIMEOUT_SECS", 20)?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn secs_env(key: &str, default: u64) -> Result<Duration> {
    let secs = match optional_env(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of seconds"))?,
        None => default,
    };
    if secs == 0 {
        anyhow::bail!("{key} must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
