use std::sync::Arc;

use crate::services::explainer::Explainer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub explainer: Arc<Explainer>,
}

impl AppState {
    pub fn new(explainer: Explainer) -> Self {
        Self {
            explainer: Arc::new(explainer),
        }
    }
}
