mod types;

pub use types::{Entry, EntryDraft, EntryId};
