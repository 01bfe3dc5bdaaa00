//! Application state - shared across all handlers.

use std::sync::Arc;

use comms_core::ports::BoardService;
use comms_infra::{InMemoryBoard, seed};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<dyn BoardService>,
    pub default_page_size: usize,
}

impl AppState {
    /// Build the application state: load the seed pool (or the demo
    /// fallback) and wrap it in the in-memory board.
    pub fn new(config: &AppConfig) -> Self {
        let pool = seed::load_pool(config.seed_path.as_deref());
        tracing::info!(count = pool.len(), "Application state initialized");

        Self {
            board: Arc::new(InMemoryBoard::from_pool(pool)),
            default_page_size: config.default_page_size,
        }
    }
}
