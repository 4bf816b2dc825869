//! Shared handler types and the request-boundary error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bookshelf_core::{Book, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Query parameters for the review write endpoint.
///
/// The review text rides in the query string rather than the request body,
/// preserved from the original wire contract.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewParams {
    /// Review text to store under the authenticated username
    pub review: Option<String>,
}

/// Render books as a JSON object keyed by ISBN, keeping catalog order.
pub fn books_to_object<'a, I>(books: I) -> Value
where
    I: IntoIterator<Item = &'a Book>,
{
    let mut object = Map::new();
    for book in books {
        object.insert(
            book.isbn.clone(),
            serde_json::to_value(book).unwrap_or(Value::Null),
        );
    }
    Value::Object(object)
}

/// Error recovered at the request boundary and rendered as status + JSON.
///
/// Store failures map onto it via `From`, so handlers propagate with `?`;
/// nothing in the taxonomy is fatal to the process.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::MissingField | StoreError::MissingReview => StatusCode::BAD_REQUEST,
            StoreError::UsernameTaken => StatusCode::CONFLICT,
            StoreError::BookNotFound | StoreError::ReviewNotFound => StatusCode::NOT_FOUND,
        };

        Self {
            status,
            error: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.error,
                "message": self.message,
            })),
        )
            .into_response()
    }
}
