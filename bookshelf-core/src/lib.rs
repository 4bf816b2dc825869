//! Bookshelf Core - data model and in-memory stores
//!
//! This crate defines the domain layer of the bookshelf catalog service: the
//! book and user types, the error taxonomy, the mutable in-memory stores, and
//! the read-only query view. It knows nothing about HTTP; the web crate owns
//! the request boundary.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::*;
pub use directory::*;
pub use error::*;
pub use query::*;
pub use types::*;
