//! User account entity.

use chrono::{DateTime, Utc};

/// An account that owns links.
///
/// `password_hash` is an Argon2 PHC string; the raw password is never stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// A user together with the number of links they own.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub user: User,
    pub link_count: i64,
}
