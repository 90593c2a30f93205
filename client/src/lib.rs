//! Client-side auth core.
//!
//! DESIGN
//! ======
//! The coordinator in [`auth`] owns every transition of the shared
//! authentication state; [`net`] talks to the server, [`storage`] holds the
//! session token, and [`state`] is the observable the UI reads. UI rendering
//! itself lives elsewhere; this crate is the service layer under it.

pub mod auth;
pub mod net;
pub mod state;
pub mod storage;

pub use auth::AuthCoordinator;
pub use state::auth::{AuthState, AuthStateHandle};
pub use storage::CredentialStore;
