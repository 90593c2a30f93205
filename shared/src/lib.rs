//! Shared wire types for the roster auth core.
//!
//! This crate owns the request/response envelopes used by both `server` and
//! `client`, plus the error taxonomy and form validation rules. Keeping them
//! in one place guarantees the two sides never disagree about field names or
//! status semantics.

pub mod error;
pub mod types;
pub mod validate;

pub use error::ApiError;
pub use types::{AuthRequest, AuthResponse, Role, UserData, UserQuery, UserResponse, UserUpdate, UsersResponse};
