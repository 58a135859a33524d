//! DTOs for the link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, LinkDraft, LinkFilter, SortOrder};

/// Request body for `POST /api/links` and `PUT /api/links/{id}`.
///
/// `PUT` is a full replace: omitting `description` or `category` clears it.
/// Missing `url`/`title` deserialize as empty strings so they are reported
/// as field-level validation errors rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LinkRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_link_url"))]
    pub url: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Title is required (max 255 characters)"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description too long (max 5000 characters)"))]
    pub description: Option<String>,

    #[validate(length(max = 100, message = "Category too long (max 100 characters)"))]
    pub category: Option<String>,
}

impl LinkRequest {
    /// Trims surrounding whitespace from every field. Call before `validate`.
    pub fn normalized(self) -> Self {
        Self {
            url: self.url.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.map(|d| d.trim().to_string()),
            category: self.category.map(|c| c.trim().to_string()),
        }
    }

    /// Converts a validated request into the domain draft.
    ///
    /// Empty optional fields are stored as NULL.
    pub fn into_draft(self) -> LinkDraft {
        LinkDraft {
            url: self.url,
            title: self.title,
            description: self.description.filter(|d| !d.is_empty()),
            category: self.category.filter(|c| !c.is_empty()),
        }
    }
}

/// Accepts only absolute URLs that have both a scheme and a host.
fn validate_link_url(url: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new("url").with_message("Invalid URL".into());

    let parsed = url::Url::parse(url).map_err(|_| invalid())?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Query parameters for `GET /api/links`.
///
/// Empty `search`/`category` values are treated as absent, and an unknown
/// `sortBy` falls back to `newest`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLinksQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, rename = "sortBy")]
    pub sort_by: Option<String>,
}

impl ListLinksQuery {
    pub fn into_filter(self) -> LinkFilter {
        let sort = SortOrder::parse_or_default(self.sort_by.as_deref());
        LinkFilter::new(self.search, self.category, sort)
    }

    /// Encodes the non-empty parameters as a URL query string (without `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("search", search);
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            serializer.append_pair("category", category);
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("sortBy", sort_by);
        }
        serializer.finish()
    }
}

/// JSON representation of a stored link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkItem {
    fn from(l: Link) -> Self {
        Self {
            id: l.id,
            user_id: l.user_id,
            url: l.url,
            title: l.title,
            description: l.description,
            category: l.category,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

/// Response for `GET /api/links`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListLinksResponse {
    pub success: bool,
    pub count: usize,
    pub links: Vec<LinkItem>,
}

/// Response for `GET /api/links/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub success: bool,
    pub link: LinkItem,
}

/// Response for `POST /api/links` and `PUT /api/links/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkMutationResponse {
    pub success: bool,
    pub message: String,
    pub link: LinkItem,
}

/// Response carrying only a confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Response for `GET /api/links/categories/list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}
