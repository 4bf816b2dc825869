//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single catalog entry.
///
/// Books are pre-seeded and never created or deleted at runtime; only the
/// `reviews` mapping is mutated, keyed by the authenticated username. At most
/// one review exists per (book, username) pair — writing again overwrites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Book {
    /// Unique catalog key
    pub isbn: String,
    pub author: String,
    pub title: String,
    /// username -> review text
    #[serde(default)]
    pub reviews: HashMap<String, String>,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            author: author.into(),
            title: title.into(),
            reviews: HashMap::new(),
        }
    }
}

/// A registered account.
///
/// The password is stored exactly as supplied and compared with plain string
/// equality; the credential model of the service is a shared-secret check,
/// not a hashed credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique directory key
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
