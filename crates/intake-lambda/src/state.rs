use std::sync::Arc;

use crate::config::IntakeConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<IntakeConfig>,
}

impl AppState {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
