//! Todo Feed
//!
//! One-shot fetch of the seed todo list.

use crate::config::AppConfig;
use crate::models::TodoRecord;
use super::ApiError;

/// Decode a feed body, keeping the first `limit` records in feed order
pub fn parse_todos(body: &str, limit: usize) -> Result<Vec<TodoRecord>, ApiError> {
    let records: Vec<TodoRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().take(limit).collect())
}

/// GET the configured feed and decode it
pub async fn fetch_todos(config: &AppConfig) -> Result<Vec<TodoRecord>, ApiError> {
    let response = reqwest::Client::new()
        .get(config.feed_url.as_str())
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    parse_todos(&body, config.feed_limit)
}
