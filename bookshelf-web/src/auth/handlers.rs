//! Authentication handlers for user registration and login

use super::{
    jwt::AuthError,
    users::{LoginRequest, RegisterRequest, Session},
};
use crate::AppState;
use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde_json::{json, Value};
use tracing::info;

/// User registration endpoint
///
/// Register a new account with username and password. Only registered users
/// can log in and write reviews.
pub async fn register_user(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<RegisterRequest>,
) -> Result<Json<Value>, AuthError> {
    info!("User registration attempt: {}", request.username);

    state.user_service.register(request).await?;

    Ok(Json(json!({
        "message": "User registered successfully"
    })))
}

/// User login endpoint
///
/// Authenticate with username and password. Returns the session value the
/// client presents as a bearer token on authenticated routes.
pub async fn login_user(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<LoginRequest>,
) -> Result<Json<Session>, AuthError> {
    info!("User login attempt: {}", request.username);

    let session = state.user_service.login(request).await?;

    info!("User logged in successfully: {}", session.username);
    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let app_state = crate::AppState::new(WebConfig::default());

        Router::new()
            .route("/register", axum::routing::post(register_user))
            .route("/login", axum::routing::post(login_user))
            .with_state(app_state)
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_user_registration() {
        let app = create_test_app();

        let response = app
            .oneshot(json_request(
                "/register",
                json!({ "username": "testuser", "password": "password123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let app = create_test_app();

        let first = app
            .clone()
            .oneshot(json_request(
                "/register",
                json!({ "username": "twice", "password": "pw" }),
            ))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(json_request(
                "/register",
                json!({ "username": "twice", "password": "pw" }),
            ))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_registration_requires_fields() {
        let app = create_test_app();

        let response = app
            .oneshot(json_request(
                "/register",
                json!({ "username": "", "password": "pw" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_user_login() {
        let app = create_test_app();

        let _register = app
            .clone()
            .oneshot(json_request(
                "/register",
                json!({ "username": "logintest", "password": "password123" }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "/login",
                json!({ "username": "logintest", "password": "password123" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_login() {
        let app = create_test_app();

        let response = app
            .oneshot(json_request(
                "/login",
                json!({ "username": "nonexistent", "password": "wrongpassword" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
