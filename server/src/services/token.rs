//! Session token issue and verification.
//!
//! Tokens are HS256 JWTs over a minimal claim set (`id`, `email`, `iat`,
//! `exp`). Name and role are intentionally left out to keep tokens small;
//! the `/users/auth` handler resolves the full record from the store.
//! Verification is pure given the key: no storage or network access.

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Default token lifetime: one day.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Built-in signing key used only when `JWT_SECRET` is unset. Running with
/// this key is a deployment misconfiguration, not a supported mode.
const DEV_SECRET: &str = "roster_dev_signing_key";

/// Identity claim carried inside a session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: i64,
    email: String,
    iat: u64,
    exp: u64,
}

/// Failure classes surfaced by [`TokenCodec::verify`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token malformed or signature invalid")]
    Malformed,
    #[error("token verification failed: {0}")]
    Unknown(String),
}

// =============================================================================
// TOKEN CODEC
// =============================================================================

/// Issues and verifies signed session tokens under a process-wide secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    /// Load the signing key from `JWT_SECRET` and the lifetime from
    /// `TOKEN_LIFETIME_SECS`. Falls back to the built-in development key
    /// with a loud warning when the secret is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("JWT_SECRET is not set, falling back to the built-in development key; tokens signed this way must never reach production");
                DEV_SECRET.to_owned()
            }
        };
        let lifetime = std::env::var("TOKEN_LIFETIME_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map_or(DEFAULT_LIFETIME, Duration::from_secs);
        Self::new(&secret, lifetime)
    }

    /// Sign a token for the given identity with the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Unknown`] if encoding fails, which only happens
    /// on key misconfiguration.
    pub fn issue(&self, id: i64, email: &str) -> Result<String, TokenError> {
        self.issue_with_lifetime(id, email, self.lifetime)
    }

    /// Sign a token with an explicit lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Unknown`] if encoding fails.
    pub fn issue_with_lifetime(&self, id: i64, email: &str, lifetime: Duration) -> Result<String, TokenError> {
        let iat = unix_now();
        let claims = Claims {
            id,
            email: email.to_owned(),
            iat,
            exp: iat + lifetime.as_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| TokenError::Unknown(e.to_string()))
    }

    /// Verify a token and return the identity it carries.
    ///
    /// # Errors
    ///
    /// [`TokenError::Expired`] once the verification time reaches `exp`,
    /// [`TokenError::Malformed`] for bad signatures or undecodable claims,
    /// [`TokenError::Unknown`] for anything else.
    pub fn verify(&self, token: &str) -> Result<TokenIdentity, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_)
            | ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
            _ => TokenError::Unknown(e.to_string()),
        })?;
        // jsonwebtoken only rejects `exp < now`; a token expires the instant
        // the clock reaches `exp`, so the boundary second is rejected here.
        if data.claims.exp <= unix_now() {
            return Err(TokenError::Expired);
        }
        Ok(TokenIdentity { id: data.claims.id, email: data.claims.email })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
