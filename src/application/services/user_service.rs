//! User account management and password checks.

use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserSummary};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Input for creating an account.
#[derive(Debug, Clone, Validate)]
pub struct AccountRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email too long (max 255 characters)")
    )]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Service for creating, listing and removing user accounts.
///
/// Passwords are hashed with Argon2id on a blocking thread; only the PHC
/// string reaches the repository.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Validates the request, hashes the password and stores the account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input or a taken
    /// username/email.
    pub async fn create_user(&self, request: AccountRequest) -> Result<User, AppError> {
        let request = AccountRequest {
            username: request.username.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            password: request.password,
        };
        request.validate()?;

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AppError::internal("Server error")
            })??;

        let user = self
            .user_repository
            .create(NewUser {
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Looks up a user by username and checks their password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the
    /// password does not match; both cases produce the same error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let invalid = || AppError::unauthorized("Invalid username or password");

        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(invalid)?;

        let stored = user.password_hash.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&stored, &password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AppError::internal("Server error")
            })?;

        if !matches {
            return Err(invalid());
        }

        Ok(user)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn get_user(&self, username: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists all users with their link counts.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        self.user_repository.list().await
    }

    /// Deletes a user and all of their links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub async fn delete_user(&self, username: &str) -> Result<(), AppError> {
        let user = self.get_user(username).await?;

        if !self.user_repository.delete(user.id).await? {
            return Err(AppError::not_found("User not found"));
        }

        tracing::info!(user_id = user.id, username, "User deleted");
        Ok(())
    }
}

/// Hashes `password` into an Argon2id PHC string with a random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt = [0u8; 16];
    rand::rng().fill(&mut salt);

    let salt = SaltString::encode_b64(&salt).map_err(|e| {
        tracing::error!(error = %e, "Failed to encode password salt");
        AppError::internal("Server error")
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Server error")
        })
}

/// Returns true if `password` matches the stored PHC string.
///
/// A stored value that does not parse never matches.
fn verify_password(stored: &str, password: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
