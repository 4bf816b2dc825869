//! OpenAPI specification for the bookshelf web server
//!
//! This module defines the OpenAPI specification for the catalog and review
//! API, served at `/api/openapi.json`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::auth::users::Session;
use crate::handlers::HealthResponse;
use bookshelf_core::Book;

/// Main OpenAPI specification for the bookshelf web server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Bookstore catalog service with per-user reviews and session login",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    paths(
        // Health endpoints
        crate::handlers::health_check,

        // Catalog lookups
        crate::handlers::list_books,
        crate::handlers::get_book_by_isbn,
        crate::handlers::get_books_by_author,
        crate::handlers::get_books_by_title,

        // Reviews
        crate::handlers::get_book_reviews,
        crate::handlers::put_book_review,
        crate::handlers::delete_book_review,
    ),
    components(
        schemas(
            HealthResponse,
            Book,
            Session,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Catalog", description = "Book catalog lookups"),
        (name = "Reviews", description = "Per-user book reviews"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token scheme the `/auth/` routes reference
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Serve the generated OpenAPI document
pub async fn serve_openapi() -> axum::response::Json<utoipa::openapi::OpenApi> {
    axum::response::Json(ApiDoc::openapi())
}
