//! Route definitions for the bookshelf web server
//!
//! This module defines all the routes for the web application. Paths mirror
//! the original service's wire contract: catalog reads at the root, review
//! writes under `/auth/`.

use crate::{auth, handlers, openapi, AppState};
use axum::{
    routing::{get, post, put},
    Router,
};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Account registration and login
        .route("/register", post(auth::handlers::register_user))
        .route("/login", post(auth::handlers::login_user))
        // Catalog reads
        .route("/", get(handlers::list_books))
        .route("/isbn/{isbn}", get(handlers::get_book_by_isbn))
        .route("/author/{author}", get(handlers::get_books_by_author))
        .route("/title/{title}", get(handlers::get_books_by_title))
        // Reviews
        .route("/review/{isbn}", get(handlers::get_book_reviews))
        .route(
            "/auth/review/{isbn}",
            put(handlers::put_book_review).delete(handlers::delete_book_review),
        )
        // API documentation
        .route("/api/openapi.json", get(openapi::serve_openapi))
}
