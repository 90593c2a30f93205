//! Session-verify middleware.
//!
//! The only place server-side identity is established from a token. Per
//! request: no token header → 401; expired → 401; malformed → 403; any
//! other verification failure → 500. On success the decoded identity is
//! attached to the request for the downstream handler.
//!
//! The token travels in the custom `accessToken` header on every protected
//! call, not an `Authorization: Bearer` header. One convention, both sides.

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use roster_shared::types::AuthResponse;

use crate::services::token::TokenError;
use crate::state::AppState;

/// Request header carrying the raw session token.
pub const TOKEN_HEADER: &str = "accessToken";

/// Verify the inbound token and attach the identity, or reject.
pub async fn verify_session(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    if token.is_empty() {
        tracing::warn!("session verify: no access token on request");
        return reject(
            StatusCode::UNAUTHORIZED,
            "Authentication failed: No token provided",
            "Access token is required",
        );
    }

    match state.tokens.verify(&token) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(TokenError::Expired) => {
            tracing::warn!("session verify: expired token");
            reject(
                StatusCode::UNAUTHORIZED,
                "Your session has expired. Please log in again.",
                "Token expired",
            )
        }
        Err(TokenError::Malformed) => {
            tracing::warn!("session verify: malformed token");
            reject(
                StatusCode::FORBIDDEN,
                "The provided token is malformed or invalid.",
                "Invalid token",
            )
        }
        Err(TokenError::Unknown(e)) => {
            tracing::error!(error = %e, "session verify: unexpected verification failure");
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred during token verification.",
                "Authentication error",
            )
        }
    }
}

fn reject(status: StatusCode, message: &str, error: &str) -> Response {
    (status, Json(AuthResponse::failure(status.as_u16(), message, error))).into_response()
}
