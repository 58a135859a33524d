//! Application error type and its HTTP mapping.
//!
//! Every failing response uses the same envelope as successful ones:
//!
//! ```json
//! { "success": false, "message": "Link not found" }
//! ```
//!
//! Validation failures additionally carry per-field detail:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation failed",
//!   "errors": [{ "field": "title", "message": "Title is required (max 255 characters)" }]
//! }
//! ```
//!
//! Store failures never leak their detail to the caller; it is logged here and
//! the response only says a server error occurred.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    retryable: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    NotFound { message: String },
    /// `retryable` marks transient store conditions such as pool exhaustion.
    #[error("{message}")]
    Internal { message: String, retryable: bool },
}

impl AppError {
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            retryable: false,
        }
    }

    pub fn retryable(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            retryable: true,
        }
    }

    /// The not-found error used for links, whether the row is missing or owned
    /// by someone else.
    pub fn link_not_found() -> Self {
        Self::not_found("Link not found")
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message, errors } => ErrorBody {
                success: false,
                message,
                errors,
                retryable: false,
            },
            AppError::Unauthorized { message } | AppError::NotFound { message } => ErrorBody {
                success: false,
                message,
                errors: Vec::new(),
                retryable: false,
            },
            AppError::Internal { message, retryable } => ErrorBody {
                success: false,
                message,
                errors: Vec::new(),
                retryable,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                axum::http::header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_foreign_key_violation()
        {
            // The token still verifies but its user row is gone.
            tracing::warn!(constraint = ?db.constraint(), "Foreign key violation");
            return AppError::unauthorized("User account no longer exists");
        }

        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                tracing::error!(error = %e, "Database unavailable");
                AppError::retryable("Server error, please retry")
            }
            other => {
                tracing::error!(error = %other, "Database error");
                AppError::internal("Server error")
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut errors: Vec<FieldError> = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();
        errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::validation("Validation failed", errors)
    }
}

/// Prefix axum puts in front of serde's message for type mismatches.
const JSON_DATA_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Pulls the offending top-level field out of a serde error message.
///
/// Handles `title: invalid type: ...` (path-prefixed) and
/// `missing field `url``. Root-level errors name no field.
fn json_error_field(detail: &str) -> Option<String> {
    let detail = detail.strip_prefix(JSON_DATA_PREFIX).unwrap_or(detail);

    if let Some(rest) = detail.strip_prefix("missing field `") {
        return rest.split('`').next().map(str::to_string);
    }

    let (path, _) = detail.split_once(": ")?;
    let field = path.split(['.', '[']).next()?;
    let is_ident = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then(|| field.to_string())
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");

        match rejection {
            JsonRejection::JsonDataError(e) => {
                let errors = json_error_field(&e.body_text())
                    .map(|field| {
                        let message = format!("Invalid value for {field}");
                        vec![FieldError::new(field, message)]
                    })
                    .unwrap_or_default();
                AppError::validation("Validation failed", errors)
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::validation("Request body is not valid JSON", Vec::new())
            }
            JsonRejection::MissingJsonContentType(_) => AppError::validation(
                "Expected request with `Content-Type: application/json`",
                Vec::new(),
            ),
            _ => AppError::validation("Invalid request body", Vec::new()),
        }
    }
}
