//! Authentication and authorization using Axum best practices
//!
//! Sessions are stateless: login mints a signed token binding the request to
//! a username, and the [`AuthUser`] extractor is the auth gate for every
//! route under `/auth/`.

pub mod handlers;
pub mod jwt;
pub mod users;


use axum::{extract::FromRequestParts, http::request::Parts};
use jwt::{AuthError, Claims};

/// Identity bound to a verified session token.
///
/// Extraction fails with 401 when the bearer token is absent, malformed,
/// badly signed, or expired.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;
        Ok(AuthUser {
            username: claims.sub,
        })
    }
}
