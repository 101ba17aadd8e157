//! SQLite repository implementation.
//!
//! Implements `EntryRepository` from `entrybook_core::storage` using SQLite.

use std::sync::Arc;

use async_trait::async_trait;

use entrybook_core::entry::{Entry, EntryDraft, EntryId};
use entrybook_core::storage::{EntryRepository, Result};

use super::conversions::row_to_entry;
use super::database::{wrap_err, Database};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// SQLite-based repository implementation.
///
/// Borrows its connection from a shared [`Database`] handle.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    database: Arc<Database>,
}

impl SqliteRepository {
    /// Creates a repository on top of an existing database handle.
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Creates a repository with its own in-memory database.
    ///
    /// Useful for testing - data is lost when the repository is dropped.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(Database::in_memory()))
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        self.database
            .connection()
            .await?
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_entry).map_err(wrap_err)?;

                let mut entries = Vec::new();
                for row_result in rows {
                    entries.push(row_result.map_err(wrap_err)?);
                }
                Ok(entries)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        self.database
            .connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRY_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_entry) {
                    Ok(entry) => Ok(Some(entry)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<EntryId> {
        let title = draft.title.clone();
        let description = draft.description.clone();

        self.database
            .connection()
            .await?
            .call(move |conn| {
                conn.execute(schema::INSERT_ENTRY, rusqlite::params![title, description])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_entry(&self, id: EntryId, draft: &EntryDraft) -> Result<bool> {
        let title = draft.title.clone();
        let description = draft.description.clone();

        self.database
            .connection()
            .await?
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ENTRY,
                        rusqlite::params![id, title, description],
                    )
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<bool> {
        self.database
            .connection()
            .await?
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ENTRY, [id])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .connection()
            .await?
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
