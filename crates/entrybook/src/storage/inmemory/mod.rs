//! In-memory storage backend.
//!
//! Stores entries in a `BTreeMap` behind an `Arc<RwLock<_>>`. Nothing is
//! persisted; useful for demos and for running without a database file.

mod repository;

pub use repository::InMemoryRepository;
