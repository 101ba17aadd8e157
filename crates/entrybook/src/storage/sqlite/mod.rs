//! SQLite storage backend implementation.
//!
//! A single [`Database`] handle owns the process-wide connection and is shared
//! with the [`SqliteRepository`] that issues the statements.

mod conversions;
mod database;
mod error;
mod repository;
mod schema;

pub use database::Database;
pub use repository::SqliteRepository;
