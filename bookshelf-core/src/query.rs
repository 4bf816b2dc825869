//! Read-only filters over the book catalog
//!
//! Exact-string-equality matches with a full scan per call. No fuzzy
//! matching, no case folding, no pagination.

use crate::{Book, BookCatalog};

/// Borrowing view that answers author and title queries against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> QueryService<'a> {
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// Books whose author exactly equals `author`, in catalog order.
    pub fn find_by_author(&self, author: &str) -> Vec<&'a Book> {
        self.catalog
            .list_all()
            .iter()
            .filter(|book| book.author == author)
            .collect()
    }

    /// Books whose title exactly equals `title`, in catalog order.
    pub fn find_by_title(&self, title: &str) -> Vec<&'a Book> {
        self.catalog
            .list_all()
            .iter()
            .filter(|book| book.title == title)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_author_matches_exactly() {
        let catalog = BookCatalog::seed();
        let query = QueryService::new(&catalog);

        let unknown = query.find_by_author("Unknown");
        let isbns: Vec<&str> = unknown.iter().map(|book| book.isbn.as_str()).collect();
        assert_eq!(isbns, ["4", "5", "6", "7"]);

        assert!(query.find_by_author("unknown").is_empty());
        assert!(query.find_by_author("Nobody").is_empty());
    }

    #[test]
    fn find_by_title_matches_exactly() {
        let catalog = BookCatalog::seed();
        let query = QueryService::new(&catalog);

        let matches = query.find_by_title("Fairy tales");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].isbn, "2");

        assert!(query.find_by_title("fairy tales").is_empty());
    }

    #[test]
    fn queries_are_pure_functions_of_catalog_state() {
        let catalog = BookCatalog::seed();
        let query = QueryService::new(&catalog);

        let first: Vec<String> = query
            .find_by_author("Unknown")
            .iter()
            .map(|book| book.isbn.clone())
            .collect();
        let second: Vec<String> = query
            .find_by_author("Unknown")
            .iter()
            .map(|book| book.isbn.clone())
            .collect();
        assert_eq!(first, second);
    }
}
