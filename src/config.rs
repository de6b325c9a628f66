//! Application Config
//!
//! Compiled-in settings, provided to the component tree via context.

use leptos::prelude::*;
use log::LevelFilter;

/// Todo feed the list is seeded from
pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Number of feed entries kept after the initial fetch
pub const DEFAULT_FEED_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Endpoint fetched once on mount
    pub feed_url: String,
    /// Leading entries of the feed to keep
    pub feed_limit: usize,
    /// Console log verbosity
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_limit: DEFAULT_FEED_LIMIT,
            log_level: LevelFilter::Info,
        }
    }
}

/// Get the app config from context, falling back to defaults
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
