//! Application configuration loaded from environment variables.

use std::env;

use comms_core::ports::DEFAULT_PAGE_SIZE;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path to a JSON seed pool; the built-in demo pool is used when unset.
    pub seed_path: Option<String>,
    pub default_page_size: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            seed_path: env::var("BOARD_SEED").ok().filter(|p| !p.is_empty()),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}
