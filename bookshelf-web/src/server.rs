//! Bookshelf Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main bookshelf web server
pub struct BookshelfServer {
    config: WebConfig,
    state: AppState,
}

impl BookshelfServer {
    /// Create a new server with the seeded catalog.
    pub fn new(config: WebConfig) -> Self {
        let state = AppState::new(config.clone());
        Self { config, state }
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting Bookshelf Web Server");
        info!("📍 Server address: http://{}", address);

        // Create the application
        let app = create_app(self.state.clone());

        // Create TCP listener
        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        // Start the server
        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for BookshelfServer
pub struct BookshelfServerBuilder {
    config: WebConfig,
}

impl BookshelfServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the simulated latency for read endpoints
    pub fn simulated_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.simulated_delay_ms = Some(delay_ms);
        self
    }

    /// Build the server
    pub fn build(self) -> BookshelfServer {
        BookshelfServer::new(self.config)
    }
}

impl Default for BookshelfServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to start a server with environment configuration
pub async fn start_server() -> WebResult<()> {
    let config = WebConfig::from_env();
    BookshelfServer::new(config).start().await
}
