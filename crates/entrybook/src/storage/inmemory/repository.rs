//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use entrybook_core::entry::{Entry, EntryDraft, EntryId};
use entrybook_core::storage::{EntryRepository, Result};

#[derive(Debug, Default)]
struct Table {
    last_id: EntryId,
    rows: BTreeMap<EntryId, Entry>,
}

/// In-memory storage backend.
///
/// IDs are assigned from a counter that never goes backwards, so a deleted
/// ID is never handed out again. Listing returns rows in ID order, which is
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<EntryId> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, draft.clone().into_entry(id));
        Ok(id)
    }

    async fn update_entry(&self, id: EntryId, draft: &EntryDraft) -> Result<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(entry) => {
                entry.apply(draft);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_entry(&self, id: EntryId) -> Result<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
