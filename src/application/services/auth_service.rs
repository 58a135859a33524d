//! Bearer token issuance and verification.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Stateless bearer tokens signed with HMAC-SHA256.
///
/// A token has the form `<payload>.<signature>` where `payload` is the
/// URL-safe base64 of `"<user_id>:<expires_unix>"` and `signature` is the
/// lowercase hex MAC of the encoded payload, keyed by `signing_secret`.
/// Nothing is stored server-side; rotating the secret invalidates every
/// outstanding token.
pub struct AuthService {
    signing_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key shared by issuer and verifier
    /// - `token_ttl` - lifetime of newly issued tokens
    pub fn new(signing_secret: String, token_ttl: Duration) -> Self {
        Self {
            signing_secret,
            token_ttl,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Issues a token for `user_id` valid for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the expiry falls outside the
    /// representable date range.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires = now
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| {
                tracing::error!(ttl = %self.token_ttl, "Token expiry out of range");
                AppError::internal("Server error")
            })?
            .timestamp();
        let payload = URL_SAFE_NO_PAD.encode(format!("{user_id}:{expires}"));

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    /// Resolves a token to the user id it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, carries a
    /// bad signature, or has expired.
    pub fn verify(&self, token: &str) -> Result<i64, AppError> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<i64, AppError> {
        let invalid = || AppError::unauthorized("Invalid or expired token");

        let (payload, signature) = token.split_once('.').ok_or_else(invalid)?;
        let signature = hex::decode(signature).map_err(|_| invalid())?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let decoded = URL_SAFE_NO_PAD.decode(payload).map_err(|_| invalid())?;
        let decoded = String::from_utf8(decoded).map_err(|_| invalid())?;
        let (user_id, expires) = decoded.split_once(':').ok_or_else(invalid)?;

        let user_id: i64 = user_id.parse().map_err(|_| invalid())?;
        let expires: i64 = expires.parse().map_err(|_| invalid())?;

        if now.timestamp() >= expires {
            return Err(invalid());
        }

        Ok(user_id)
    }
}
