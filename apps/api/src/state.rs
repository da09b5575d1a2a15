use std::sync::Arc;

use crate::llm_client::CompletionService;
use crate::news::client::NewsClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// `LlmClient` in production; a scripted double in tests.
    pub llm: Arc<dyn CompletionService>,
    pub news: NewsClient,
}
