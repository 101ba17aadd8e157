use async_trait::async_trait;

use crate::entry::{Entry, EntryDraft, EntryId};

use super::Result;

/// Repository for the `entries` table.
///
/// Every operation is a single statement with no transaction and no retry.
/// Text values must reach the backend as bound parameters.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists every entry in storage-defined order.
    async fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Gets an entry by its ID, or `None` when no row matches.
    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Inserts a new entry and returns the ID the storage assigned to it.
    async fn create_entry(&self, draft: &EntryDraft) -> Result<EntryId>;

    /// Overwrites title and description of an existing entry.
    ///
    /// Returns `false` when no row has the given ID. That is not an error.
    async fn update_entry(&self, id: EntryId, draft: &EntryDraft) -> Result<bool>;

    /// Deletes an entry by its ID.
    ///
    /// Returns `false` when no row has the given ID. That is not an error.
    async fn delete_entry(&self, id: EntryId) -> Result<bool>;

    /// Cheap round trip to the backend, used by readiness probes.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
