//! Defaults applied to every layout container.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDefaults {
    /// Divider thickness in pixels (valid range: 0-20).
    pub handle_size: f64,
    /// Divider color: hex, rgb()/rgba() or a color keyword.
    pub handle_color: String,
    /// Pane width floor in pixels (>= 0).
    pub min_width: f64,
    /// Pane height floor in pixels (>= 0).
    pub min_height: f64,
    /// Grab area on each side of a divider (valid range: 0-20).
    pub hit_slop: f64,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            handle_size: 1.0,
            handle_color: "black".into(),
            min_width: 0.0,
            min_height: 0.0,
            hit_slop: 5.0,
        }
    }
}
