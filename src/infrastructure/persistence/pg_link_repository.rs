//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkDraft, LinkFilter};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::link_query::{LINK_COLUMNS, build_list_query};

/// PostgreSQL repository for link storage and retrieval.
///
/// Every statement filters on `user_id`, so ownership is enforced by the query
/// itself rather than checked afterwards.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    user_id: i64,
    url: String,
    title: String,
    description: Option<String>,
    category: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.user_id,
            r.url,
            r.title,
            r.description,
            r.category,
            r.created_at,
            r.updated_at,
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn list(&self, user_id: i64, filter: &LinkFilter) -> Result<Vec<Link>, AppError> {
        let mut qb = build_list_query(user_id, filter);

        let rows = qb
            .build_query_as::<LinkRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn create(&self, user_id: i64, draft: LinkDraft) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            INSERT INTO links (user_id, url, title, description, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(draft.url)
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.category)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: i64,
        user_id: i64,
        draft: LinkDraft,
    ) -> Result<Option<Link>, AppError> {
        // updated_at is refreshed by the update_links_updated_at trigger.
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            r#"
            UPDATE links
            SET url = $1, title = $2, description = $3, category = $4
            WHERE id = $5 AND user_id = $6
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(draft.url)
        .bind(draft.title)
        .bind(draft.description)
        .bind(draft.category)
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn categories(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        let categories = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT category
            FROM links
            WHERE user_id = $1 AND category IS NOT NULL
            ORDER BY category
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(categories)
    }
}
