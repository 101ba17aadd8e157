//! Serde helper functions for form deserialization.
//!
//! HTML forms submit every field as a string, and an empty field should read
//! as absent rather than fail to parse.

use serde::{Deserialize, Deserializer};

use crate::entry::EntryId;

/// Deserialize an optional entry id, treating empty strings as None.
///
/// Non-numeric values are still an error.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<EntryId>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
