//! SQLite row conversion functions.

use entrybook_core::entry::Entry;
use rusqlite::Row;

/// Convert a SQLite row to an Entry.
///
/// Expected columns: id, title, description
pub fn row_to_entry(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
    })
}
