//! REST plumbing for the roster API.

pub mod api;

pub use api::Api;
