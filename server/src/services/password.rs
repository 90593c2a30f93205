//! Password hashing for stored credentials.
//!
//! Format: `salt$digest` where `salt` is 16 random bytes hex-encoded and
//! `digest` is `sha256(salt_hex || password)` hex-encoded. The password
//! itself is never stored and never enters a token.

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

fn digest(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Hash a password under a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let hash = digest(&salt_hex, password);
    format!("{salt_hex}${hash}")
}

/// Check a password against a stored `salt$digest` entry. Unparseable
/// entries never match.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once('$') else {
        return false;
    };
    digest(salt_hex, password) == expected
}
