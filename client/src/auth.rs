//! Auth coordinator: login, registration, logout, and auth-check flows.
//!
//! STATE OWNERSHIP
//! ===============
//! This is the only writer of the shared [`AuthState`] observable and the
//! credential store. Each operation publishes at most one state transition,
//! and only after every dependent network call has resolved; a failure
//! anywhere leaves both the state and the stored token exactly as they were.
//! Overlapping operations are last-write-wins on the observable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use roster_shared::error::ApiError;
use roster_shared::types::{AuthRequest, AuthResponse, UserQuery};
use roster_shared::validate::{validate_login, validate_registration};

use crate::net::Api;
use crate::state::auth::{AuthState, AuthStateHandle};
use crate::storage::CredentialStore;

/// Client-side auth service. Cloning shares the store and state handle.
#[derive(Clone, Debug)]
pub struct AuthCoordinator {
    api: Api,
    store: CredentialStore,
    state: AuthStateHandle,
}

impl AuthCoordinator {
    #[must_use]
    pub fn new(api: Api, store: CredentialStore, state: AuthStateHandle) -> Self {
        Self { api, store, state }
    }

    /// The credential store this coordinator writes.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.store
    }

    /// The auth-state handle this coordinator publishes to.
    #[must_use]
    pub fn auth_state(&self) -> &AuthStateHandle {
        &self.state
    }

    // =========================================================================
    // CHECK AUTHENTICATION
    // =========================================================================

    /// Validate the stored token against the server.
    ///
    /// No stored token → unauthenticated envelope without a network call.
    /// A 200 publishes the authenticated state; a 401/403 publishes the
    /// anonymous state. Any other failure is classified and returned with
    /// the state left untouched.
    pub async fn check_authentication(&self) -> AuthResponse {
        let Some(token) = self.store.get() else {
            return AuthResponse::failure(401, "No authentication token found", "No token");
        };

        match self.api.check_auth(&token).await {
            Ok(resp) => {
                if let Some(user) = resp.user.clone() {
                    self.state.publish(AuthState::authenticated(user));
                }
                resp
            }
            Err(ApiError::Authentication(message)) => {
                self.state.publish(AuthState::anonymous());
                AuthResponse::failure(401, "Authentication required", &message)
            }
            Err(e) => failure_from(&e),
        }
    }

    // =========================================================================
    // LOGIN
    // =========================================================================

    /// Exchange credentials for a session.
    ///
    /// On success the canonical user record is re-fetched by id so the
    /// published identity has a consistent shape regardless of the login
    /// payload, the token is stored, and the authenticated state is
    /// published, in that order, only after everything resolved.
    pub async fn login(&self, email: &str, password: &str) -> AuthResponse {
        if let Err(errors) = validate_login(email, password) {
            return AuthResponse::failure(400, &errors.to_string(), "Validation failed");
        }

        let request = AuthRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            name: None,
        };
        let resp = match self.api.login(&request).await {
            Ok(resp) => resp,
            Err(e) => return failure_from(&e),
        };
        let (Some(login_user), Some(token)) = (resp.user, resp.access_token) else {
            tracing::error!("login response missing user or token");
            return AuthResponse::failure(500, "Login failed", "Malformed login response");
        };

        let user = match self.api.get_user(&UserQuery::by_id(login_user.id)).await {
            Ok(Some(user)) => user,
            Ok(None) => return AuthResponse::failure(404, "User Not Found", "Not Found"),
            Err(e) => return failure_from(&e),
        };

        self.store.set(&token);
        self.state.publish(AuthState::authenticated(user.clone()));
        AuthResponse::success(
            resp.status,
            resp.message.as_deref().unwrap_or("Login Successful"),
            user,
            Some(token),
        )
    }

    // =========================================================================
    // REGISTER
    // =========================================================================

    /// Create an account, then log in with the same credentials.
    ///
    /// A pre-flight lookup rejects an already-taken email before the
    /// register endpoint is contacted. When registration succeeds but the
    /// follow-up login fails, the login failure is returned; success is
    /// only reported for a fully authenticated session.
    pub async fn register(&self, email: &str, password: &str, confirm_password: &str, name: &str) -> AuthResponse {
        if let Err(errors) = validate_registration(email, password, confirm_password, name) {
            return AuthResponse::failure(400, &errors.to_string(), "Validation failed");
        }

        match self.api.get_user(&UserQuery::by_email(email)).await {
            Ok(Some(_)) => {
                return AuthResponse::failure(409, "User with this email already exists", "Duplicate User");
            }
            Ok(None) => {}
            Err(e) => return failure_from(&e),
        }

        let request = AuthRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            name: Some(name.to_owned()),
        };
        if let Err(e) = self.api.register(&request).await {
            return failure_from(&e);
        }

        self.login(email, password).await
    }

    // =========================================================================
    // LOGOUT
    // =========================================================================

    /// Drop the stored credential and publish the anonymous state.
    /// Local-only; never fails.
    pub fn logout(&self) {
        self.store.clear();
        self.state.publish(AuthState::anonymous());
    }
}

fn failure_from(error: &ApiError) -> AuthResponse {
    AuthResponse::failure(error.status(), &error.message(), &error.to_string())
}
