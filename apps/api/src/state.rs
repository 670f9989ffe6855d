use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Cheap to clone: an `Arc` and a small config struct. There is no shared
/// mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion provider. Default: `OpenRouterClient`. Tests swap
    /// in scripted implementations.
    pub provider: Arc<dyn CompletionProvider>,
    pub config: Config,
}
