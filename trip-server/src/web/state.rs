//! Application state for the web layer.

use std::sync::Arc;

use crate::resrobot::TripSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Where trip-search responses come from
    pub source: Arc<dyn TripSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl TripSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
