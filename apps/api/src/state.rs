use std::sync::Arc;

use crate::search::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable once built; each request runs it independently.
    pub pipeline: Arc<Pipeline>,
}
