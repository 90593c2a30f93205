//! User routes: login, register, lookup, moderation, auth status.

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;

use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use roster_shared::types::{AuthRequest, AuthResponse, UserData, UserQuery, UserResponse, UserUpdate, UsersResponse};
use roster_shared::validate::{limits, valid_email};

use crate::services::password::{hash_password, verify_password};
use crate::services::store::StoreError;
use crate::services::token::TokenIdentity;
use crate::state::AppState;

// =============================================================================
// LOGIN
// =============================================================================

/// `POST /users/login`: exchange credentials for a token and identity.
///
/// Every credential failure answers the same 401 so the response does not
/// reveal whether the email exists.
pub async fn login(State(state): State<AppState>, Json(request): Json<AuthRequest>) -> Response {
    let Some(record) = state.users.find_by_email(&request.email).await else {
        return invalid_credentials();
    };
    if !verify_password(&request.password, &record.password_hash) {
        return invalid_credentials();
    }

    match state.tokens.issue(record.data.id, &record.data.email) {
        Ok(token) => {
            tracing::info!(user_id = record.data.id, "login successful");
            (
                StatusCode::OK,
                Json(AuthResponse::success(200, "Login Successful", record.data, Some(token))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token issue failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure(500, "Login failed", "Token issue error")),
            )
                .into_response()
        }
    }
}

fn invalid_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(AuthResponse::failure(401, "Invalid email or password", "Unauthorized")),
    )
        .into_response()
}

// =============================================================================
// REGISTER
// =============================================================================

/// `POST /users/register`: validate input and create the user record.
/// The client performs the follow-up login itself.
pub async fn register(State(state): State<AppState>, Json(request): Json<AuthRequest>) -> Response {
    let name = request.name.clone().unwrap_or_default();

    if let Some(response) = validate_registration_input(&request, &name) {
        return response;
    }

    let new_user = crate::services::store::NewUser {
        email: request.email.clone(),
        name,
        password_hash: hash_password(&request.password),
    };
    match state.users.create(new_user).await {
        Ok(data) => {
            tracing::info!(user_id = data.id, "user registered");
            (
                StatusCode::CREATED,
                Json(UserResponse::found(201, "User Created & Registered Successfully", data)),
            )
                .into_response()
        }
        Err(e @ (StoreError::DuplicateEmail | StoreError::DuplicateName)) => (
            StatusCode::CONFLICT,
            Json(UserResponse::failure(409, &e.to_string(), "Duplicate User")),
        )
            .into_response(),
    }
}

fn validate_registration_input(request: &AuthRequest, name: &str) -> Option<Response> {
    let message = if !valid_email(&request.email) {
        Some("Invalid email")
    } else if name.len() < limits::NAME_MIN || name.len() > limits::NAME_MAX {
        Some("Invalid name")
    } else if request.password.len() < limits::PASSWORD_MIN || request.password.len() > limits::PASSWORD_MAX {
        Some("Invalid password")
    } else {
        None
    };
    message.map(|m| {
        (
            StatusCode::BAD_REQUEST,
            Json(UserResponse::failure(400, m, "Invalid request")),
        )
            .into_response()
    })
}

// =============================================================================
// LOOKUP
// =============================================================================

/// `GET /users/get?id=&email=&name=`: first matching field, in order
/// id, email, name.
pub async fn get_user(State(state): State<AppState>, Query(query): Query<UserQuery>) -> Response {
    let mut user: Option<UserData> = None;
    if let Some(id) = query.id {
        user = state.users.find_by_id(id).await.map(|r| r.data);
    }
    if user.is_none() {
        if let Some(email) = &query.email {
            user = state.users.find_by_email(email).await.map(|r| r.data);
        }
    }
    if user.is_none() {
        if let Some(name) = &query.name {
            user = state.users.find_by_name(name).await.map(|r| r.data);
        }
    }

    match user {
        Some(data) => (
            StatusCode::OK,
            Json(UserResponse::found(200, "User Fetched Successfully", data)),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(UserResponse::failure(404, "User Not Found", "Not Found")),
        )
            .into_response(),
    }
}

/// `GET /users/getAll`: list every user record.
pub async fn get_all(State(state): State<AppState>) -> Response {
    let data = state.users.all().await;
    (
        StatusCode::OK,
        Json(UsersResponse {
            success: true,
            status: 200,
            message: Some("Users Fetched Successfully".to_owned()),
            error: None,
            data,
        }),
    )
        .into_response()
}

// =============================================================================
// MODERATION
// =============================================================================

/// `PUT /users/edit`: behind the session-verify layer. Applies the present
/// fields of the update; changed emails and names follow the same rules as
/// registration.
pub async fn edit_user(State(state): State<AppState>, Json(update): Json<UserUpdate>) -> Response {
    if let Some(response) = validate_update_input(&update) {
        return response;
    }

    match state.users.update(update).await {
        Ok(Some(data)) => {
            tracing::info!(user_id = data.id, "user updated");
            (
                StatusCode::OK,
                Json(UserResponse::found(200, "User updated successfully", data)),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(UserResponse::failure(404, "User not found", "Not Found")),
        )
            .into_response(),
        Err(e @ (StoreError::DuplicateEmail | StoreError::DuplicateName)) => (
            StatusCode::CONFLICT,
            Json(UserResponse::failure(409, &e.to_string(), "Duplicate User")),
        )
            .into_response(),
    }
}

fn validate_update_input(update: &UserUpdate) -> Option<Response> {
    let message = match (&update.email, &update.name) {
        (Some(email), _) if !valid_email(email) => Some("Invalid email"),
        (_, Some(name)) if name.len() < limits::NAME_MIN || name.len() > limits::NAME_MAX => Some("Invalid name"),
        _ => None,
    };
    message.map(|m| {
        (
            StatusCode::BAD_REQUEST,
            Json(UserResponse::failure(400, m, "Invalid request")),
        )
            .into_response()
    })
}

/// `DELETE /users/{userId}`: behind the session-verify layer. Removing a
/// user invalidates their outstanding tokens at the next auth check.
pub async fn delete_user(State(state): State<AppState>, Path(user_id): Path<i64>) -> Response {
    match state.users.delete(user_id).await {
        Some(data) => {
            tracing::info!(user_id = data.id, "user deleted");
            (StatusCode::OK, Json(UserResponse::ok(200, "User deleted successfully"))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(UserResponse::failure(404, "User not found", "Not Found")),
        )
            .into_response(),
    }
}

// =============================================================================
// AUTH STATUS
// =============================================================================

/// `GET /users/auth`: behind the session-verify layer. Resolves the full
/// record for the verified identity so the client gets a canonical shape.
pub async fn auth_status(
    State(state): State<AppState>,
    Extension(identity): Extension<TokenIdentity>,
) -> Response {
    match state.users.find_by_id(identity.id).await {
        Some(record) => (
            StatusCode::OK,
            Json(AuthResponse::success(200, "Authentication check successful", record.data, None)),
        )
            .into_response(),
        // Token is valid but the user is gone (deleted after issuance).
        None => (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse::failure(401, "Authentication check failed", "Unknown user")),
        )
            .into_response(),
    }
}
