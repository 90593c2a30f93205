//! Roster API server.
//!
//! Exposed as a library so integration tests (and the client crate's
//! end-to-end tests) can assemble the router against an in-memory store
//! without going through the binary entry point.

pub mod routes;
pub mod services;
pub mod state;
