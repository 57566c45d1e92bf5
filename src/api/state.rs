use std::sync::Arc;

use crate::services::providers::TextGenerator;
use crate::store::ReviewStore;

/// Shared application state
///
/// The review store is loaded once at startup and never mutated afterwards,
/// so handlers share it without locking. The generator is the configured
/// text-generation collaborator behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReviewStore>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Creates application state from its shared components
    pub fn new(store: Arc<ReviewStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { store, generator }
    }
}
