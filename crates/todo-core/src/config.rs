//! Widget Configuration

use serde::Deserialize;

/// Default key the collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key of the single blob holding the whole collection
    pub storage_key: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl TodoConfig {
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(TodoConfig::default().storage_key, "todos");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: TodoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TodoConfig::default());

        let config: TodoConfig = serde_json::from_str(r#"{"storage_key":"work"}"#).unwrap();
        assert_eq!(config.storage_key, "work");
    }
}
