use serde::Serialize;

/// Storage-assigned identifier of an entry.
pub type EntryId = i64;

/// A single title/description record.
///
/// The `id` is assigned by the storage layer on creation and never changes
/// for the lifetime of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
}

impl Entry {
    /// Returns the editable part of this entry.
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// Overwrites title and description, keeping the id.
    pub fn apply(&mut self, draft: &EntryDraft) {
        self.title = draft.title.clone();
        self.description = draft.description.clone();
    }
}

/// The user-editable fields of an entry, used to create or update rows.
///
/// No validation happens here: empty strings are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryDraft {
    pub title: String,
    pub description: String,
}

impl EntryDraft {
    /// Create a draft from a title and a description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Turn the draft into a stored entry with the given id.
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
