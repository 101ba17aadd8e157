//! Application state shared by all request handlers.

use std::sync::Arc;

use entrybook_core::storage::EntryRepository;

use crate::config::Config;

#[cfg(feature = "sqlite")]
use crate::storage::{Database, SqliteRepository};

#[cfg(feature = "inmemory")]
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is a trait object so the
/// handlers do not care which backend was compiled in.
#[derive(Clone)]
pub struct AppState {
    /// Entry repository.
    pub entry_repo: Arc<dyn EntryRepository>,
    /// Database handle backing `entry_repo`, closed on shutdown.
    #[cfg(feature = "sqlite")]
    database: Arc<Database>,
}

impl AppState {
    /// Creates the state for the configured backend.
    ///
    /// The SQLite connection is not opened here; the first request opens it.
    #[cfg(feature = "sqlite")]
    pub fn from_config(config: &Config) -> Self {
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Self::with_database(Arc::new(Database::file(&config.sqlite_path)))
    }

    /// Creates the state for the configured backend.
    #[cfg(feature = "inmemory")]
    pub fn from_config(_config: &Config) -> Self {
        tracing::info!("Using in-memory storage");
        Self {
            entry_repo: Arc::new(InMemoryRepository::new()),
        }
    }

    #[cfg(feature = "sqlite")]
    fn with_database(database: Arc<Database>) -> Self {
        Self {
            entry_repo: Arc::new(SqliteRepository::new(database.clone())),
            database,
        }
    }

    /// Releases storage resources. Called once the server has stopped.
    #[cfg(feature = "sqlite")]
    pub async fn close(&self) {
        if !self.database.is_open() {
            tracing::debug!("Database was never opened");
            return;
        }
        if let Err(e) = self.database.close().await {
            tracing::warn!(error = %e, "Failed to close database");
        }
    }

    /// Releases storage resources. Called once the server has stopped.
    #[cfg(feature = "inmemory")]
    pub async fn close(&self) {}
}

/// Empty state on a throwaway in-memory SQLite database.
#[cfg(feature = "sqlite")]
impl Default for AppState {
    fn default() -> Self {
        Self::with_database(Arc::new(Database::in_memory()))
    }
}

/// Empty state on a fresh in-memory repository.
#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self {
            entry_repo: Arc::new(InMemoryRepository::new()),
        }
    }
}
