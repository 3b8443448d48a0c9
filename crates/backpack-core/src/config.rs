//! Backpack Configuration

use serde::{Deserialize, Serialize};

/// Storage slot used by every released version of the app
pub const DEFAULT_STORAGE_KEY: &str = "backpack_items_v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackpackConfig {
    /// Name of the key-value slot holding the serialized collection
    pub storage_key: String,
    /// Quantity the add form resets to
    pub draft_qty: u32,
    /// Per-unit weight (kg) the add form resets to
    pub draft_weight: f64,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            draft_qty: 1,
            draft_weight: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackpackConfig::default();
        assert_eq!(config.storage_key, "backpack_items_v1");
        assert_eq!(config.draft_qty, 1);
        assert_eq!(config.draft_weight, 0.5);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: BackpackConfig = serde_json::from_str(r#"{"storage_key":"trip"}"#).unwrap();
        assert_eq!(config.storage_key, "trip");
        assert_eq!(config.draft_qty, 1);
    }
}
