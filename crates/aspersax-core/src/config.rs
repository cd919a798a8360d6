//! Application configuration shared by the infrastructure and the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::CostRates;

fn default_log_filter() -> String {
    "info".to_string()
}

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted collections. Defaults to the platform
    /// data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// JSON file describing the acting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,

    pub costs: CostRates,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: default_log_filter(),
            profile_path: None,
            costs: CostRates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.is_none());
        assert_eq!(config.costs, CostRates::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"costs": {"energy_per_hour": 4000.0}}"#).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.costs.energy_per_hour, 4000.0);
        assert_eq!(config.costs.herbicide_per_liter, 12_500.0);
    }
}
