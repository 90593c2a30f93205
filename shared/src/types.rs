//! Request and response envelopes shared by client and server.
//!
//! Every endpoint answers with a `{success, status, message?, error?}`
//! envelope plus endpoint-specific payload fields (`user`, `accessToken`,
//! `data`). Wire field names are camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

// =============================================================================
// USER DATA
// =============================================================================

/// Moderation role attached to a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Moderator,
}

/// Canonical user record as both sides see it. The mutable original lives in
/// the server-side store; tokens carry only the `id`/`email` subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Lookup request for `GET /users/get`. The server resolves the first
/// matching field, in order id, email, name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserQuery {
    #[must_use]
    pub fn by_id(id: i64) -> Self {
        Self { id: Some(id), ..Self::default() }
    }

    #[must_use]
    pub fn by_email(email: &str) -> Self {
        Self { email: Some(email.to_owned()), ..Self::default() }
    }
}

/// Partial update posted to `PUT /users/edit`. Absent fields are left
/// unchanged; the password is never editable through this request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

// =============================================================================
// AUTH REQUEST / RESPONSE
// =============================================================================

/// Credentials posted to `/users/login` and `/users/register`.
/// `name` is only meaningful for registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Envelope returned by the auth endpoints and by every coordinator
/// operation. `success == true` implies `status` is in the 2xx range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserData>,
    #[serde(rename = "accessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl AuthResponse {
    /// Successful envelope carrying a user and optionally a fresh token.
    #[must_use]
    pub fn success(status: u16, message: &str, user: UserData, access_token: Option<String>) -> Self {
        Self {
            success: true,
            status,
            message: Some(message.to_owned()),
            error: None,
            user: Some(user),
            access_token,
        }
    }

    /// Failed envelope; never carries a user or token.
    #[must_use]
    pub fn failure(status: u16, message: &str, error: &str) -> Self {
        Self {
            success: false,
            status,
            message: Some(message.to_owned()),
            error: Some(error.to_owned()),
            user: None,
            access_token: None,
        }
    }
}

// =============================================================================
// USER LOOKUP RESPONSES
// =============================================================================

/// Envelope for single-record lookups (`/users/get`, `/users/register`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<UserData>,
}

impl UserResponse {
    /// Successful envelope without a record payload (delete acknowledgements).
    #[must_use]
    pub fn ok(status: u16, message: &str) -> Self {
        Self {
            success: true,
            status,
            message: Some(message.to_owned()),
            error: None,
            data: None,
        }
    }

    #[must_use]
    pub fn found(status: u16, message: &str, data: UserData) -> Self {
        Self {
            success: true,
            status,
            message: Some(message.to_owned()),
            error: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn failure(status: u16, message: &str, error: &str) -> Self {
        Self {
            success: false,
            status,
            message: Some(message.to_owned()),
            error: Some(error.to_owned()),
            data: None,
        }
    }
}

/// Envelope for `/users/getAll`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Vec<UserData>,
}
