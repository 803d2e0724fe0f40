// Export pipeline and its HTTP handlers.
// Remote text generation goes through suggestion::SuggestionClient only.

pub mod handlers;
pub mod orchestrator;
