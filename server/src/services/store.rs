//! User store collaborator.
//!
//! The auth core only needs lookup and creation; the real persistence layer
//! lives behind this trait. [`MemoryStore`] is the provided implementation;
//! its write path is serialized by the lock, which is all the coordination
//! the core requires.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use async_trait::async_trait;
use roster_shared::types::{Role, UserData, UserUpdate};
use tokio::sync::RwLock;

/// Stored record: the public user data plus the salted password hash.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub data: UserData,
    pub password_hash: String,
}

/// Input for [`UserStore::create`]. The password is already hashed by the
/// route layer; the store never sees plaintext.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    DuplicateEmail,
    #[error("a user with this name already exists")]
    DuplicateName,
}

/// Lookup/creation capability consumed by the route layer.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a record, assigning its id.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the email or name is already taken.
    async fn create(&self, new: NewUser) -> Result<UserData, StoreError>;
    async fn find_by_id(&self, id: i64) -> Option<UserRecord>;
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;
    async fn find_by_name(&self, name: &str) -> Option<UserRecord>;
    async fn all(&self) -> Vec<UserData>;

    /// Apply the present fields of `update` to the matching record.
    /// `Ok(None)` when no record has that id.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when a changed email or name collides with another user.
    async fn update(&self, update: UserUpdate) -> Result<Option<UserData>, StoreError>;

    /// Remove a record, returning its data. `None` when absent; idempotent.
    async fn delete(&self, id: i64) -> Option<UserData>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: Vec<UserRecord>,
}

/// In-memory [`UserStore`] with monotonically increasing ids.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, new: NewUser) -> Result<UserData, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.data.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }
        if inner.users.iter().any(|u| u.data.name == new.name) {
            return Err(StoreError::DuplicateName);
        }
        inner.next_id += 1;
        let data = UserData {
            id: inner.next_id,
            email: new.email,
            name: new.name,
            role: Some(Role::User),
            created_at: None,
            updated_at: None,
        };
        inner.users.push(UserRecord { data: data.clone(), password_hash: new.password_hash });
        Ok(data)
    }

    async fn find_by_id(&self, id: i64) -> Option<UserRecord> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.data.id == id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.data.email == email).cloned()
    }

    async fn find_by_name(&self, name: &str) -> Option<UserRecord> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.data.name == name).cloned()
    }

    async fn all(&self) -> Vec<UserData> {
        let inner = self.inner.read().await;
        inner.users.iter().map(|u| u.data.clone()).collect()
    }

    async fn update(&self, update: UserUpdate) -> Result<Option<UserData>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.users.iter().position(|u| u.data.id == update.id) else {
            return Ok(None);
        };
        if let Some(email) = &update.email {
            if inner.users.iter().any(|u| u.data.id != update.id && u.data.email == *email) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        if let Some(name) = &update.name {
            if inner.users.iter().any(|u| u.data.id != update.id && u.data.name == *name) {
                return Err(StoreError::DuplicateName);
            }
        }

        let record = &mut inner.users[index];
        if let Some(email) = update.email {
            record.data.email = email;
        }
        if let Some(name) = update.name {
            record.data.name = name;
        }
        if let Some(role) = update.role {
            record.data.role = Some(role);
        }
        Ok(Some(record.data.clone()))
    }

    async fn delete(&self, id: i64) -> Option<UserData> {
        let mut inner = self.inner.write().await;
        let index = inner.users.iter().position(|u| u.data.id == id)?;
        Some(inner.users.remove(index).data)
    }
}
