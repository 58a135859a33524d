//! Owner-scoped link operations.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkDraft, LinkFilter};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for listing, reading and mutating a user's links.
///
/// Inputs reaching this service are already validated (see
/// [`crate::api::dto::link::LinkRequest`]). The service turns "no matching
/// row" into [`AppError::NotFound`] without ever telling apart a missing link
/// from one owned by another user.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns every link of `user_id` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self, user_id: i64, filter: &LinkFilter) -> Result<Vec<Link>, AppError> {
        self.link_repository.list(user_id, filter).await
    }

    /// Retrieves a single link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist or is not
    /// owned by `user_id`.
    pub async fn get_link(&self, id: i64, user_id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id, user_id)
            .await?
            .ok_or_else(AppError::link_not_found)
    }

    /// Creates a link owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, user_id: i64, draft: LinkDraft) -> Result<Link, AppError> {
        let link = self.link_repository.create(user_id, draft).await?;
        tracing::debug!(link_id = link.id, user_id, "Link created");
        Ok(link)
    }

    /// Replaces url, title, description and category of an existing link.
    ///
    /// The ownership lookup runs before the write; if it finds nothing no
    /// update statement is issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist or is not
    /// owned by `user_id`.
    pub async fn update_link(
        &self,
        id: i64,
        user_id: i64,
        draft: LinkDraft,
    ) -> Result<Link, AppError> {
        if self
            .link_repository
            .find_by_id(id, user_id)
            .await?
            .is_none()
        {
            return Err(AppError::link_not_found());
        }

        // A concurrent delete can still win between the lookup and the write.
        let link = self
            .link_repository
            .update(id, user_id, draft)
            .await?
            .ok_or_else(AppError::link_not_found)?;

        tracing::debug!(link_id = id, user_id, "Link updated");
        Ok(link)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    pub async fn delete_link(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        if !self.link_repository.delete(id, user_id).await? {
            return Err(AppError::link_not_found());
        }

        tracing::debug!(link_id = id, user_id, "Link deleted");
        Ok(())
    }

    /// Distinct categories used by `user_id`, sorted.
    pub async fn list_categories(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        self.link_repository.categories(user_id).await
    }
}
