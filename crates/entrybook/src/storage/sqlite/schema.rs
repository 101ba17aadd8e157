//! SQLite schema definition and SQL query constants.
//!
//! Every value is bound through a positional placeholder, never formatted
//! into the statement text.

/// SQL statement to create the entries table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL
);
"#;

pub const PING: &str = "SELECT 1";

// No ORDER BY: rows come back in whatever order SQLite yields them.
pub const SELECT_ENTRIES: &str = r#"
SELECT id, title, description
FROM entries
"#;

pub const SELECT_ENTRY_BY_ID: &str = r#"
SELECT id, title, description
FROM entries
WHERE id = ?1
"#;

pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (title, description)
VALUES (?1, ?2)
"#;

pub const UPDATE_ENTRY: &str = r#"
UPDATE entries
SET title = ?2, description = ?3
WHERE id = ?1
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
"#;
