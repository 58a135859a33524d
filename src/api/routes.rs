//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_categories_handler,
    list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /links`                  - List the caller's links (search, category, sortBy)
/// - `POST   /links`                  - Create a link
/// - `GET    /links/{id}`             - Fetch one link
/// - `PUT    /links/{id}`             - Replace a link's fields
/// - `DELETE /links/{id}`             - Delete a link
/// - `GET    /links/categories/list`  - Distinct categories in use
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/categories/list", get(list_categories_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
