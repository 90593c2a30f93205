//! Server-side services: token issue/verify, password hashing, user store.

pub mod password;
pub mod store;
pub mod token;
