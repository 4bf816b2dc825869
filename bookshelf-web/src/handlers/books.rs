//! Catalog read handlers
//!
//! All of these are public routes over the shared catalog. Matching is exact
//! string equality throughout; an empty author or title result surfaces as
//! 404 at this boundary.

use super::types::{books_to_object, ApiError};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use bookshelf_core::{Book, QueryService, StoreError};
use serde_json::Value;
use tracing::debug;

/// Full catalog listing
#[utoipa::path(
    get,
    path = "/",
    tag = "Catalog",
    summary = "List all books",
    description = "The full catalog as a JSON object keyed by ISBN, in catalog order",
    responses(
        (status = 200, description = "Catalog keyed by ISBN")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Value> {
    state.simulate_latency().await;

    let catalog = state.catalog.read().await;
    Json(books_to_object(catalog.list_all()))
}

/// Book details by ISBN
#[utoipa::path(
    get,
    path = "/isbn/{isbn}",
    tag = "Catalog",
    summary = "Get a book by ISBN",
    params(
        ("isbn" = String, Path, description = "Catalog key of the book")
    ),
    responses(
        (status = 200, description = "The requested book", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    state.simulate_latency().await;

    let catalog = state.catalog.read().await;
    let book = catalog.get(&isbn).ok_or(StoreError::BookNotFound)?;
    Ok(Json(book.clone()))
}

/// Books by exact author match
#[utoipa::path(
    get,
    path = "/author/{author}",
    tag = "Catalog",
    summary = "Find books by author",
    params(
        ("author" = String, Path, description = "Exact author name")
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN"),
        (status = 404, description = "No books by this author")
    )
)]
pub async fn get_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.simulate_latency().await;

    let catalog = state.catalog.read().await;
    let matches = QueryService::new(&catalog).find_by_author(&author);

    if matches.is_empty() {
        debug!(%author, "author query matched nothing");
        return Err(ApiError::not_found(
            "no_matching_books",
            "No books found by this author",
        ));
    }

    Ok(Json(books_to_object(matches)))
}

/// Books by exact title match
#[utoipa::path(
    get,
    path = "/title/{title}",
    tag = "Catalog",
    summary = "Find books by title",
    params(
        ("title" = String, Path, description = "Exact book title")
    ),
    responses(
        (status = 200, description = "Matching books keyed by ISBN"),
        (status = 404, description = "No books with this title")
    )
)]
pub async fn get_books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.simulate_latency().await;

    let catalog = state.catalog.read().await;
    let matches = QueryService::new(&catalog).find_by_title(&title);

    if matches.is_empty() {
        debug!(%title, "title query matched nothing");
        return Err(ApiError::not_found(
            "no_matching_books",
            "No books found with this title",
        ));
    }

    Ok(Json(books_to_object(matches)))
}
