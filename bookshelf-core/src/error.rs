//! Error taxonomy for the in-memory stores
//!
//! Every failure the catalog and user directory can produce is deterministic
//! given store state, so the variants carry no source errors. The web layer
//! maps each variant to an HTTP status at the request boundary.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by [`BookCatalog`](crate::BookCatalog) and
/// [`UserDirectory`](crate::UserDirectory) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username and password are required")]
    MissingField,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Book not found")]
    BookNotFound,

    #[error("Review not found for this user")]
    ReviewNotFound,

    #[error("Review is required")]
    MissingReview,
}

impl StoreError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::MissingField => "missing_field",
            StoreError::UsernameTaken => "username_taken",
            StoreError::BookNotFound => "book_not_found",
            StoreError::ReviewNotFound => "review_not_found",
            StoreError::MissingReview => "missing_review",
        }
    }
}
