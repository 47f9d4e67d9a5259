//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPlanner};
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Planner with cached results
    pub planner: Arc<CachedPlanner>,

    /// Search configuration (default line and request limits)
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            planner: Arc::new(CachedPlanner::new(cache_config)),
            config: Arc::new(config),
        }
    }
}
