//! Configuration schema types for covshare.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod container;
mod layout;
mod logging;
mod table;

pub use container::*;
pub use layout::*;
pub use logging::*;
pub use table::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CovshareConfig {
    pub logging: LoggingConfig,
    pub layout: LayoutDefaults,
    pub table: TableConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: CovshareConfig = toml::from_str("").unwrap();
        assert_eq!(config, CovshareConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: CovshareConfig = toml::from_str(
            r#"
[layout]
handle_size = 4.0

[table]
multi_select = true
"#,
        )
        .unwrap();
        assert_eq!(config.layout.handle_size, 4.0);
        assert_eq!(config.layout.handle_color, "black");
        assert!(config.table.multi_select);
        assert_eq!(config.table.min_column_width, 20.0);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_is_lowercase() {
        let config: CovshareConfig = toml::from_str("[logging]\nlevel = \"debug\"").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(toml::from_str::<CovshareConfig>("[logging]\nlevel = \"loud\"").is_err());
    }
}
