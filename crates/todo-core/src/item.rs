//! Item Entity
//!
//! A single todo entry. Field names on the wire follow the persisted
//! format (`createdAt`), timestamps are RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of ids produced by `generate`
    pub(crate) fn millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Next id: the creation time in milliseconds, bumped past the last
    /// issued value so ids never repeat. A last value at `i64::MAX` falls
    /// back to the timestamp; the caller checks that against the collection.
    pub(crate) fn generate(now: DateTime<Utc>, last_issued: Option<i64>) -> (Self, i64) {
        let stamp = now.timestamp_millis();
        let next = match last_issued {
            Some(last) if last >= stamp => last.checked_add(1).unwrap_or(stamp),
            _ => stamp,
        };
        (Self(next.to_string()), next)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, never blank
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Set once at creation
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(id: ItemId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}

/// Trim user input, rejecting text that is blank afterwards
pub(crate) fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_creation() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let item = Item::new(ItemId::new("1"), "Test item".to_string(), now);
        assert_eq!(item.id.as_str(), "1");
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
        assert_eq!(item.created_at, now);
    }

    #[test]
    fn test_generate_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_714_552_200_123).unwrap();
        let (id, issued) = ItemId::generate(now, None);
        assert_eq!(id.as_str(), "1714552200123");
        assert_eq!(issued, 1_714_552_200_123);
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let now = Utc.timestamp_millis_opt(1000).unwrap();
        let (id, _) = ItemId::generate(now, Some(1000));
        assert_eq!(id.as_str(), "1001");

        let (id, _) = ItemId::generate(now, Some(999));
        assert_eq!(id.as_str(), "1000");
        assert_eq!(ItemId::new("abc").millis(), None);
    }

    #[test]
    fn test_generate_at_i64_max_falls_back_to_stamp() {
        let now = Utc.timestamp_millis_opt(1000).unwrap();
        let (id, issued) = ItemId::generate(now, Some(i64::MAX));
        assert_eq!(id.as_str(), "1000");
        assert_eq!(issued, 1000);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  buy milk  ").as_deref(), Some("buy milk"));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t\n "), None);
    }

    #[test]
    fn test_wire_field_names() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let item = Item::new(ItemId::new("42"), "x".to_string(), now);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "42");
        assert_eq!(value["completed"], false);
        assert!(value["createdAt"].as_str().unwrap().starts_with("2024-05-01T08:30:00"));
        assert!(value.get("created_at").is_none());
    }
}
