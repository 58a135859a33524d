//! Handlers for link endpoints.
//!
//! Every handler runs behind [`crate::api::middleware::auth`] and receives the
//! caller as a [`CurrentUser`]. All lookups are scoped to that user.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CategoriesResponse, LinkItem, LinkMutationResponse, LinkRequest, LinkResponse,
    ListLinksQuery, ListLinksResponse, MessageResponse,
};
use crate::api::extract::JsonBody;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Parses a path id. A non-numeric id cannot name a link, so it is reported
/// as not found rather than as a malformed request.
fn parse_link_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::link_not_found())
}

/// Lists the caller's links.
///
/// # Endpoint
///
/// `GET /api/links?search=&category=&sortBy=`
///
/// # Query Parameters
///
/// - `search` - case-insensitive substring over title, description, url, category
/// - `category` - exact category match
/// - `sortBy` - `newest` (default), `oldest` or `title`
///
/// # Response
///
/// ```json
/// { "success": true, "count": 1, "links": [ { "id": 1, "title": "Example", ... } ] }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let filter = query.into_filter();

    let links = state
        .link_service
        .list_links(user.user_id, &filter)
        .await?;

    let links: Vec<LinkItem> = links.into_iter().map(LinkItem::from).collect();

    Ok(Json(ListLinksResponse {
        success: true,
        count: links.len(),
        links,
    }))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist or belongs to another user.
pub async fn get_link_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_link_id(&id)?;

    let link = state.link_service.get_link(id, user.user_id).await?;

    Ok(Json(LinkResponse {
        success: true,
        link: link.into(),
    }))
}

/// Creates a link owned by the caller.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "title": "Example",
///   "description": "optional",
///   "category": "optional"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with per-field `errors` if validation fails;
/// nothing is written in that case.
pub async fn create_link_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    JsonBody(payload): JsonBody<LinkRequest>,
) -> Result<(StatusCode, Json<LinkMutationResponse>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let link = state
        .link_service
        .create_link(user.user_id, payload.into_draft())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkMutationResponse {
            success: true,
            message: "Link created successfully".to_string(),
            link: link.into(),
        }),
    ))
}

/// Replaces every editable field of a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// Same body as creation. Fields left out are cleared, not kept.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the link doesn't exist or belongs to another user.
pub async fn update_link_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<LinkRequest>,
) -> Result<Json<LinkMutationResponse>, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let id = parse_link_id(&id)?;

    let link = state
        .link_service
        .update_link(id, user.user_id, payload.into_draft())
        .await?;

    Ok(Json(LinkMutationResponse {
        success: true,
        message: "Link updated successfully".to_string(),
        link: link.into(),
    }))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist, was already deleted, or
/// belongs to another user.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_link_id(&id)?;

    state.link_service.delete_link(id, user.user_id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Link deleted successfully".to_string(),
    }))
}

/// Lists the distinct categories used by the caller.
///
/// # Endpoint
///
/// `GET /api/links/categories/list`
pub async fn list_categories_handler(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.link_service.list_categories(user.user_id).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_id() {
        assert_eq!(parse_link_id("42").unwrap(), 42);
        assert!(matches!(
            parse_link_id("abc").unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(parse_link_id("").is_err());
    }
}
