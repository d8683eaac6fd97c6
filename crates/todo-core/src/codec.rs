//! Persisted Blob Codec
//!
//! The whole collection is stored as one JSON array of item records.

use crate::error::{StoreError, StoreResult};
use crate::item::Item;

/// Serialize the collection, preserving order
pub fn encode(items: &[Item]) -> StoreResult<String> {
    serde_json::to_string(items).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse a persisted collection, reconstructing timestamps
pub fn decode(raw: &str) -> StoreResult<Vec<Item>> {
    serde_json::from_str(raw).map_err(|e| StoreError::Decode(e.to_string()))
}
