use std::sync::Arc;

use crate::analysis::store::AnalysisStore;
use crate::config::Config;
use crate::validation::ResumeValidator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup and shared read-only across requests.
    pub validator: Arc<ResumeValidator>,
    /// Pluggable analysis store. Default: InMemoryAnalysisStore.
    pub store: Arc<dyn AnalysisStore>,
}
