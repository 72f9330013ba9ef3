//! JSON deserialization structures for the identifier data files.

use serde::Deserialize;

/// One species or move entry, keyed by its snake_case identifier.
#[derive(Deserialize)]
pub struct IdentifierEntry {
    pub num: u16,
    pub name: String,
}
