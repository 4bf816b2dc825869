//! The in-memory user directory
//!
//! Registered accounts live in a plain `Vec` for the lifetime of the process.
//! Users are appended on registration and never mutated or deleted.

use crate::{StoreError, StoreResult, User};
use tracing::{debug, info};

/// Username-keyed account store with a plaintext credential check.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from explicit accounts, for test fixtures.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Register a new account.
    ///
    /// Fails with [`StoreError::MissingField`] when either field is empty and
    /// [`StoreError::UsernameTaken`] when the username is already registered.
    pub fn register(&mut self, username: &str, password: &str) -> StoreResult<()> {
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::MissingField);
        }

        if self.exists(username) {
            debug!(username, "registration rejected, username taken");
            return Err(StoreError::UsernameTaken);
        }

        self.users.push(User::new(username, password));
        info!(username, "user registered");
        Ok(())
    }

    /// Whether an account with this username exists.
    pub fn exists(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username == username)
    }

    /// Plain string-equality credential check on both fields.
    pub fn check_credentials(&self, username: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|user| user.username == username && user.password == password)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
