//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkDraft, LinkFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for a user's links.
///
/// Every method takes the caller's `user_id` and must scope its query by it:
/// a link owned by someone else is reported exactly like a missing one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists all of the user's links matching `filter`, ordered by `filter.sort`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, user_id: i64, filter: &LinkFilter) -> Result<Vec<Link>, AppError>;

    /// Finds a link by id within the user's links.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found and owned by `user_id`
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Link>, AppError>;

    /// Inserts a new link owned by `user_id`.
    ///
    /// Timestamps are assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, draft: LinkDraft) -> Result<Link, AppError>;

    /// Overwrites url, title, description and category of a link.
    ///
    /// Returns `Ok(None)` if no row matches `(id, user_id)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        user_id: i64,
        draft: LinkDraft,
    ) -> Result<Option<Link>, AppError>;

    /// Deletes a link.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError>;

    /// Distinct non-null categories across the user's links, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn categories(&self, user_id: i64) -> Result<Vec<String>, AppError>;
}
