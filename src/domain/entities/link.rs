//! Link entity representing a stored bookmark.

use chrono::{DateTime, Utc};

/// A bookmark owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        user_id: i64,
        url: String,
        title: String,
        description: Option<String>,
        category: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            url,
            title,
            description,
            category,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the link belongs to `user_id`.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Validated field set used for both creation and full-replace updates.
///
/// Every field is written; an absent `description` or `category` clears the
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}
