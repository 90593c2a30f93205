//! Typed calls against the user endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request is classified into [`ApiError`] here, at the
//! boundary: connection-level failures become `Network`, HTTP error statuses
//! are classified by code with the server's `message` field preserved for UI
//! rendering. Callers never see raw transport errors.

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use roster_shared::error::ApiError;
use roster_shared::types::{AuthRequest, AuthResponse, UserData, UserQuery, UserResponse, UserUpdate, UsersResponse};

/// Request header carrying the raw session token on protected calls.
/// The same custom header the server middleware reads, not
/// `Authorization: Bearer`.
pub const TOKEN_HEADER: &str = "accessToken";

/// HTTP client bound to a server base URL.
#[derive(Clone, Debug)]
pub struct Api {
    http: reqwest::Client,
    base_url: String,
}

impl Api {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL from `SERVER_URL`, defaulting to localhost.
    #[must_use]
    pub fn from_env() -> Self {
        let base = std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        Self::new(&base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // =========================================================================
    // AUTH ENDPOINTS
    // =========================================================================

    /// `POST /users/login`.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`]; a 401 surfaces as `Authentication` with the
    /// server's message.
    pub async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("/users/login"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(transport)
    }

    /// `POST /users/register`.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`] on any non-2xx status.
    pub async fn register(&self, request: &AuthRequest) -> Result<UserResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("/users/register"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<UserResponse>().await.map_err(transport)
    }

    /// `GET /users/auth` with the token attached in [`TOKEN_HEADER`].
    ///
    /// # Errors
    ///
    /// `Authentication` for 401/403, otherwise classified as usual.
    pub async fn check_auth(&self, token: &str) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .get(self.url("/users/auth"))
            .header(TOKEN_HEADER, token)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(transport)
    }

    // =========================================================================
    // USER LOOKUP
    // =========================================================================

    /// `GET /users/get`: `Ok(None)` when the server answers 404, so callers
    /// can distinguish "absent" from a real failure.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`] for everything except 404.
    pub async fn get_user(&self, query: &UserQuery) -> Result<Option<UserData>, ApiError> {
        let resp = self
            .http
            .get(self.url("/users/get"))
            .query(query)
            .send()
            .await
            .map_err(transport)?;
        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body = resp.json::<UserResponse>().await.map_err(transport)?;
        Ok(body.data)
    }

    /// `GET /users/getAll`.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`] on any non-2xx status.
    pub async fn get_all_users(&self) -> Result<Vec<UserData>, ApiError> {
        let resp = self
            .http
            .get(self.url("/users/getAll"))
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body = resp.json::<UsersResponse>().await.map_err(transport)?;
        Ok(body.data)
    }

    // =========================================================================
    // MODERATION
    // =========================================================================

    /// `PUT /users/edit` with the token attached in [`TOKEN_HEADER`].
    /// Returns the record as the server sees it after the update.
    ///
    /// # Errors
    ///
    /// `Authentication` for 401/403, otherwise classified as usual.
    pub async fn edit_user(&self, token: &str, update: &UserUpdate) -> Result<UserData, ApiError> {
        let resp = self
            .http
            .put(self.url("/users/edit"))
            .header(TOKEN_HEADER, token)
            .json(update)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        let body = resp.json::<UserResponse>().await.map_err(transport)?;
        body.data
            .ok_or_else(|| ApiError::Other("edit response missing user data".to_owned()))
    }

    /// `DELETE /users/{userId}` with the token attached in [`TOKEN_HEADER`].
    ///
    /// # Errors
    ///
    /// `Authentication` for 401/403, otherwise classified as usual.
    pub async fn delete_user(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/users/{id}")))
            .header(TOKEN_HEADER, token)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

fn transport(e: reqwest::Error) -> ApiError {
    if e.is_decode() {
        ApiError::Other(format!("unexpected response body: {e}"))
    } else {
        ApiError::Network(e.to_string())
    }
}

async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::from_status(status, &message)
}
