#![allow(dead_code)]

use axum_test::TestServer;
use linknote::application::services::AuthService;
use linknote::routes::build_router;
use linknote::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const SIGNING_SECRET: &str = "test-signing-secret";

pub fn auth_service() -> AuthService {
    AuthService::new(SIGNING_SECRET.to_string(), chrono::Duration::hours(1))
}

/// Bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: i64) -> String {
    auth_service().issue(user_id).unwrap()
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, 'not-a-hash') RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_link(
    pool: &PgPool,
    user_id: i64,
    url: &str,
    title: &str,
    description: Option<&str>,
    category: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (user_id, url, title, description, category) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(user_id)
    .bind(url)
    .bind(title)
    .bind(description)
    .bind(category)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a link with an explicit creation time offset, in seconds before now.
pub async fn create_aged_link(pool: &PgPool, user_id: i64, title: &str, age_seconds: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (user_id, url, title, created_at) \
         VALUES ($1, 'https://example.com', $2, NOW() - make_interval(secs => $3)) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind(age_seconds as f64)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(auth_service()))
}

/// Full application router: auth, tracing and CORS included.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);
    TestServer::new(build_router(state, &[])).unwrap()
}
