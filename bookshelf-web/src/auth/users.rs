//! Registration and login over the shared user directory

use super::jwt::{AuthError, Claims, JwtService, TOKEN_TTL_SECS};
use bookshelf_core::{StoreError, UserDirectory};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use utoipa::ToSchema;

/// User registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session value minted on successful login.
///
/// Nothing is stored server side; the signed token carries the username
/// binding and the validity window. A later login simply mints a fresh
/// session, it does not revoke earlier tokens.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Session {
    /// Opaque signed token to present as `Authorization: Bearer`
    pub token: String,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    /// Validity window in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Authentication operations over an injected user directory.
#[derive(Debug, Clone)]
pub struct UserService {
    directory: Arc<RwLock<UserDirectory>>,
}

impl UserService {
    /// Create a service around a shared directory.
    pub fn new(directory: Arc<RwLock<UserDirectory>>) -> Self {
        Self { directory }
    }

    /// Register a new account.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), AuthError> {
        let mut directory = self.directory.write().await;

        directory
            .register(&request.username, &request.password)
            .map_err(|err| match err {
                StoreError::UsernameTaken => AuthError::UsernameTaken,
                _ => AuthError::MissingCredentials,
            })
    }

    /// Validate credentials and mint a signed session.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let authenticated = {
            let directory = self.directory.read().await;
            directory.check_credentials(&request.username, &request.password)
        };

        if !authenticated {
            debug!(username = %request.username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::new(request.username.clone());
        let token = JwtService::sign(&claims)?;

        info!(username = %request.username, "session issued");

        Ok(Session {
            token,
            username: request.username,
            issued_at: Utc
                .timestamp_opt(claims.iat, 0)
                .single()
                .unwrap_or_else(Utc::now),
            expires_in: TOKEN_TTL_SECS,
        })
    }
}
