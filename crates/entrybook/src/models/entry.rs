use serde::Deserialize;

use entrybook_core::entry::{EntryDraft, EntryId};
use entrybook_core::serde::deserialize_optional_id;

/// Form payload for creating an entry.
///
/// Missing fields become empty strings. The browser's `required` attribute is
/// the only validation.
#[derive(Debug, Deserialize)]
pub struct CreateEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CreateEntry {
    pub fn into_draft(self) -> EntryDraft {
        EntryDraft::new(self.title, self.description)
    }
}

/// Form payload for updating an entry. The id comes from a hidden field.
///
/// A missing or empty id is `None`; it matches no row.
#[derive(Debug, Deserialize)]
pub struct UpdateEntry {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<EntryId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateEntry {
    pub fn into_parts(self) -> (Option<EntryId>, EntryDraft) {
        (self.id, EntryDraft::new(self.title, self.description))
    }
}

/// `?id=` query string used by the edit and delete links.
#[derive(Debug, Deserialize)]
pub struct EntryIdQuery {
    pub id: EntryId,
}
