//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; all inner fields are Arc-wrapped.

use std::sync::Arc;

use crate::services::store::UserStore;
use crate::services::token::TokenCodec;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenCodec) -> Self {
        Self { users, tokens: Arc::new(tokens) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
