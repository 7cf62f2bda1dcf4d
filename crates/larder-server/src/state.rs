use larder_core::store::RecipeStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared handler state: the store behind the trait so tests can swap in
/// a double, plus the start time reported by `/health`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub started: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            started: Instant::now(),
        }
    }
}
