use crate::FALLBACK_INITIAL;

use serde::{Deserialize, Serialize};

/// A single user profile as held in the list and persisted to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub first: String,
    pub last: String,
    /// Thumbnail URI; `None` renders as the first-name initial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first: first.into(),
            last: last.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Uppercased first letter of the first name, or `?` when it is empty.
    pub fn initial(&self) -> char {
        self.first
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or(FALLBACK_INITIAL)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}
