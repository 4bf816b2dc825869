//! The in-memory book catalog
//!
//! Owns all book and review data. The backing store is a `Vec` so that
//! full-catalog listings keep seed insertion order; every lookup is a
//! single-key equality scan, which is the intended access pattern for a
//! catalog of this size.

use crate::{Book, StoreError, StoreResult};
use std::collections::HashMap;
use tracing::debug;

/// ISBN-keyed book store with per-user review mutation.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from explicit entries, keeping their order.
    ///
    /// Intended for test fixtures; callers are expected to supply unique
    /// ISBNs. A duplicate key would shadow the earlier entry on lookup.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The static ten-classics catalog the service ships with.
    pub fn seed() -> Self {
        Self::from_books(vec![
            Book::new("1", "Chinua Achebe", "Things Fall Apart"),
            Book::new("2", "Hans Christian Andersen", "Fairy tales"),
            Book::new("3", "Dante Alighieri", "The Divine Comedy"),
            Book::new("4", "Unknown", "The Epic Of Gilgamesh"),
            Book::new("5", "Unknown", "The Book Of Job"),
            Book::new("6", "Unknown", "One Thousand and One Nights"),
            Book::new("7", "Unknown", "Njál's Saga"),
            Book::new("8", "Jane Austen", "Pride and Prejudice"),
            Book::new("9", "Honoré de Balzac", "Le Père Goriot"),
            Book::new(
                "10",
                "Samuel Beckett",
                "Molloy, Malone Dies, The Unnamable, the trilogy",
            ),
        ])
    }

    /// Look up a book by its ISBN.
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn == isbn)
    }

    /// All books in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Insert or overwrite the review for `username` on the given book.
    pub fn set_review(&mut self, isbn: &str, username: &str, text: &str) -> StoreResult<()> {
        if text.is_empty() {
            return Err(StoreError::MissingReview);
        }

        let book = self.get_mut(isbn).ok_or(StoreError::BookNotFound)?;
        book.reviews
            .insert(username.to_string(), text.to_string());

        debug!(isbn, username, "review written");
        Ok(())
    }

    /// Remove the review keyed by `username` on the given book.
    pub fn delete_review(&mut self, isbn: &str, username: &str) -> StoreResult<()> {
        let book = self.get_mut(isbn).ok_or(StoreError::BookNotFound)?;

        if book.reviews.remove(username).is_none() {
            return Err(StoreError::ReviewNotFound);
        }

        debug!(isbn, username, "review deleted");
        Ok(())
    }

    /// All reviews on the given book, keyed by username.
    pub fn get_reviews(&self, isbn: &str) -> StoreResult<&HashMap<String, String>> {
        self.get(isbn)
            .map(|book| &book.reviews)
            .ok_or(StoreError::BookNotFound)
    }
}
