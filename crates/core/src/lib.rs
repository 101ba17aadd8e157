//! Functional core for entrybook.
//!
//! Pure domain types and storage contracts. Nothing in this crate performs I/O;
//! backends live in the `entrybook` binary crate.

pub mod entry;
pub mod serde;
pub mod storage;
