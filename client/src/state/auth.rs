//! Authentication state observable.
//!
//! One `AuthState` per process (per tab, in a browser): "is someone logged
//! in, and as whom". Fields are private and only the two constructors exist,
//! so `status` and `user` can never be updated independently; every publish
//! replaces the pair wholesale. Concurrent publishers are last-write-wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::sync::Arc;

use roster_shared::types::UserData;
use tokio::sync::watch;

/// Snapshot of the client authentication state.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    status: bool,
    user: Option<UserData>,
}

impl AuthState {
    /// Logged-out state: `{false, none}`.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { status: false, user: None }
    }

    /// Logged-in state carrying the resolved user.
    #[must_use]
    pub fn authenticated(user: UserData) -> Self {
        Self { status: true, user: Some(user) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserData> {
        self.user.as_ref()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::anonymous()
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Process-wide handle to the auth state. Written only by the coordinator,
/// read and watched by arbitrarily many observers.
#[derive(Clone, Debug)]
pub struct AuthStateHandle {
    tx: Arc<watch::Sender<AuthState>>,
}

impl AuthStateHandle {
    /// Fresh handle initialized to the anonymous state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthState::anonymous());
        Self { tx: Arc::new(tx) }
    }

    /// Replace the state atomically.
    pub fn publish(&self, state: AuthState) {
        self.tx.send_replace(state);
    }

    /// Current state by value.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    /// Watch for state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }
}

impl Default for AuthStateHandle {
    fn default() -> Self {
        Self::new()
    }
}
