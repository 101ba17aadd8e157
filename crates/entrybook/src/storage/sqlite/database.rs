//! Shared SQLite connection handle.

use std::path::PathBuf;

use tokio::sync::OnceCell;
use tokio_rusqlite::Connection;

use entrybook_core::storage::Result;

use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
pub(super) fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    Memory,
}

/// Process-wide handle to the SQLite database.
///
/// The connection is opened on the first call to [`Database::connection`] and
/// the same connection is handed out afterwards. Concurrent first callers
/// wait on a single open. All statements run on the `tokio-rusqlite`
/// background thread, one at a time.
#[derive(Debug)]
pub struct Database {
    target: Target,
    conn: OnceCell<Connection>,
}

impl Database {
    /// A handle for a file-based database. The file is created on first use.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
            conn: OnceCell::new(),
        }
    }

    /// A handle for an in-memory database, lost when the handle is closed.
    pub fn in_memory() -> Self {
        Self {
            target: Target::Memory,
            conn: OnceCell::new(),
        }
    }

    /// Whether the connection has been opened.
    pub fn is_open(&self) -> bool {
        self.conn.initialized()
    }

    /// Returns the shared connection, opening it on first use.
    pub async fn connection(&self) -> Result<&Connection> {
        self.conn.get_or_try_init(|| self.open()).await
    }

    /// Closes the connection if it was ever opened.
    ///
    /// Statements issued after this fail with `ConnectionFailed`.
    pub async fn close(&self) -> Result<()> {
        let Some(conn) = self.conn.get() else {
            return Ok(());
        };

        conn.clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::info!(database = ?self.target, "Closed SQLite connection");
        Ok(())
    }

    async fn open(&self) -> Result<Connection> {
        let conn = match &self.target {
            Target::File(path) => Connection::open(path.clone()).await,
            Target::Memory => Connection::open_in_memory().await,
        }
        .map_err(map_open_error)?;

        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)?;

        tracing::info!(database = ?self.target, "Opened SQLite connection");
        Ok(conn)
    }
}
