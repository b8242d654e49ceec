//! Data table defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Narrowest a column can be resized to, in pixels (valid range: 1-200).
    pub min_column_width: f64,
    /// Width of the checkbox column in multi-select tables (valid range: 0-200).
    pub select_column_width: f64,
    /// Body height used when the table height is unknown (>= 1).
    pub default_body_height: f64,
    pub multi_select: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_column_width: 20.0,
            select_column_width: 35.0,
            default_body_height: 500.0,
            multi_select: false,
        }
    }
}
