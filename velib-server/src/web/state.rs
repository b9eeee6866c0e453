//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where station rows come from (live API or snapshot)
    pub source: Arc<dyn StationSource>,

    /// Rows requested per fetch
    pub limit: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl StationSource + 'static, limit: usize) -> Self {
        Self::from_shared(Arc::new(source), limit)
    }

    /// Create app state around an already shared source.
    pub fn from_shared(source: Arc<dyn StationSource>, limit: usize) -> Self {
        Self { source, limit }
    }
}
