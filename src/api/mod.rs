//! Remote API
//!
//! Bindings to the todo feed, organized by resource.

mod todos;

use thiserror::Error;

pub use todos::*;

/// Failure while loading the todo feed
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx status
    #[error("todo feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body was not a JSON array of todo records
    #[error("malformed todo feed: {0}")]
    Decode(#[from] serde_json::Error),
}
