//! Credential store: single-slot persistence for the session token.
//!
//! At most one token is held at a time, under the well-known key
//! [`ACCESS_TOKEN_KEY`]; absence means logged out or never logged in. In a
//! browser deployment this slot maps to the localStorage entry of the same
//! key. Staleness is not checked here; that is the server codec's concern
//! at verification time.

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Well-known storage key for the session token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Shared handle to the stored credential. Cloning shares the slot.
#[derive(Clone, Debug, Default)]
pub struct CredentialStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if one is stored.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Store a token. An empty token is refused (logged, not stored) so
    /// that emptiness stays indistinguishable from absence for readers.
    pub fn set(&self, token: &str) {
        if token.is_empty() {
            tracing::error!("refusing to store an empty access token");
            return;
        }
        *self.lock() = Some(token.to_owned());
    }

    /// Remove the token unconditionally. Idempotent.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    // The slot is a plain Option with no invariant a mid-write panic could
    // break, so a poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
