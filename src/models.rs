//! Frontend Models
//!
//! Data structures matching the remote todo feed.

use serde::{Deserialize, Serialize};

/// Todo record (matches feed entries; extra fields such as `userId` are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl TodoRecord {
    pub fn new(id: u32, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}
