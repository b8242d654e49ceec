//! covshare configuration.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use covshare_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ContainerSchema, CovshareConfig, LayoutDefaults, LogLevel, LoggingConfig, PaneSchema,
    TableConfig, CONFIG_SCHEMA_VERSION,
};

use covshare_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<CovshareConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from `path` when given, otherwise from the default path.
pub fn load_config_from(path: Option<&Path>) -> Result<CovshareConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CovshareConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&CovshareConfig::default());
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"table\""));
        assert!(json.contains("\"handle_color\": \"black\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[table]\nmulti_select = true\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.table.multi_select);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = CovshareConfig::default();
        let parsed: CovshareConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
