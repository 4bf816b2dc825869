//! Review handlers
//!
//! Reading reviews is public; writing and deleting require a verified
//! session, and the acting username always comes from the token, never from
//! the request.

use super::types::{ApiError, ReviewParams};
use crate::{auth::AuthUser, AppState};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::info;

/// All reviews on a book, keyed by username
#[utoipa::path(
    get,
    path = "/review/{isbn}",
    tag = "Reviews",
    summary = "Get reviews for a book",
    params(
        ("isbn" = String, Path, description = "Catalog key of the book")
    ),
    responses(
        (status = 200, description = "Reviews keyed by username"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.simulate_latency().await;

    let catalog = state.catalog.read().await;
    let reviews = catalog.get_reviews(&isbn)?;
    Ok(Json(json!(reviews)))
}

/// Add or modify the caller's review on a book
#[utoipa::path(
    put,
    path = "/auth/review/{isbn}",
    tag = "Reviews",
    summary = "Write a review",
    description = "Insert or overwrite the authenticated user's review. The text rides in the `review` query parameter.",
    params(
        ("isbn" = String, Path, description = "Catalog key of the book"),
        ReviewParams
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Review written"),
        (status = 400, description = "Review text missing"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn put_book_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(isbn): Path<String>,
    Query(params): Query<ReviewParams>,
) -> Result<Json<Value>, ApiError> {
    let text = params.review.unwrap_or_default();

    let mut catalog = state.catalog.write().await;
    catalog.set_review(&isbn, &user.username, &text)?;

    info!(%isbn, username = %user.username, "review written");
    Ok(Json(json!({
        "message": "Review added/modified successfully"
    })))
}

/// Delete the caller's review on a book
#[utoipa::path(
    delete,
    path = "/auth/review/{isbn}",
    tag = "Reviews",
    summary = "Delete a review",
    description = "Remove the authenticated user's review from the book.",
    params(
        ("isbn" = String, Path, description = "Catalog key of the book")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 404, description = "Book or review not found")
    )
)]
pub async fn delete_book_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(isbn): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut catalog = state.catalog.write().await;
    catalog.delete_review(&isbn, &user.username)?;

    info!(%isbn, username = %user.username, "review deleted");
    Ok(Json(json!({
        "message": "Review deleted successfully"
    })))
}
