mod entry;

pub use entry::{CreateEntry, EntryIdQuery, UpdateEntry};
