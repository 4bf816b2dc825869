//! Application state shared across request handlers

use crate::auth::users::UserService;
use crate::WebConfig;
use bookshelf_core::{BookCatalog, UserDirectory};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Process-wide state handed to every handler.
///
/// The stores are injected rather than global: tests build fresh fixtures per
/// case via [`AppState::with_stores`], and the binary seeds the static
/// catalog. A single `RwLock` per store is the mutual-exclusion guard that
/// makes them safe under the multi-worker runtime.
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// ISBN-keyed book and review store
    pub catalog: Arc<RwLock<BookCatalog>>,
    /// Registration and login over the shared user directory
    pub user_service: UserService,
}

impl AppState {
    /// Create state with the seeded catalog and an empty user directory.
    pub fn new(config: WebConfig) -> Self {
        Self::with_stores(config, BookCatalog::seed(), UserDirectory::new())
    }

    /// Build state around injected stores.
    pub fn with_stores(
        config: WebConfig,
        catalog: BookCatalog,
        directory: UserDirectory,
    ) -> Self {
        info!(
            books = catalog.len(),
            users = directory.len(),
            "application state initialized"
        );

        Self {
            config,
            catalog: Arc::new(RwLock::new(catalog)),
            user_service: UserService::new(Arc::new(RwLock::new(directory))),
        }
    }

    /// Sleep for the configured simulated latency, if any.
    ///
    /// Applied by the read handlers only; writes always answer immediately.
    pub async fn simulate_latency(&self) {
        if let Some(delay_ms) = self.config.simulated_delay_ms {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
