//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User, UserSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing user accounts.
///
/// Used by the `admin` CLI; the HTTP API only ever sees user ids resolved from
/// bearer tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users with their link counts, oldest first.
    async fn list(&self) -> Result<Vec<UserSummary>, AppError>;

    /// Deletes a user and, through the foreign key cascade, all their links.
    ///
    /// Returns `Ok(false)` if no user had that id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
