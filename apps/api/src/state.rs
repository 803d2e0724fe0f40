use std::sync::Arc;

use crate::export::Exporter;
use crate::suggestion::SuggestionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// One client per process; it owns the session suggestion cache.
    pub suggestions: Arc<SuggestionClient>,
    pub exporter: Exporter,
}
