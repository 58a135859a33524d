//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters for every user-supplied value.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Owner-scoped link storage and retrieval
//! - [`PgUserRepository`] - User account storage
//!
//! The listing query is assembled by [`link_query::build_list_query`].

pub mod link_query;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;

/// Applies the embedded schema migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
