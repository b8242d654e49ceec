//! Declarative container description, as written in scenario files.
//!
//! Sizes stay strings here (`"30%"`, `"120px"`, `"auto"`) so validation can
//! report every bad value at once; they become typed dimensions when the
//! container is mounted.

use std::collections::BTreeMap;

use covshare_common::types::Alignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSchema {
    pub label: String,
    pub width: String,
    pub height: String,
}

/// One `[[container]]` table. Unset options fall back to [`LayoutDefaults`].
///
/// [`LayoutDefaults`]: super::LayoutDefaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSchema {
    pub id: String,
    pub alignment: Alignment,
    /// Content box width, resolved against the window.
    pub width: String,
    /// Content box height, resolved against the window.
    pub height: String,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    pub handle_size: Option<f64>,
    pub handle_color: Option<String>,
    /// Extra style entries passed through to the host's divider rendering.
    pub handle_style: BTreeMap<String, String>,
    pub hit_slop: Option<f64>,
    pub hidden: Vec<bool>,
    pub connected_to: Vec<String>,
    #[serde(rename = "pane")]
    pub panes: Vec<PaneSchema>,
}

impl Default for ContainerSchema {
    fn default() -> Self {
        Self {
            id: String::new(),
            alignment: Alignment::Horizontal,
            width: "100%".into(),
            height: "100%".into(),
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            handle_size: None,
            handle_color: None,
            handle_style: BTreeMap::new(),
            hit_slop: None,
            hidden: Vec::new(),
            connected_to: Vec::new(),
            panes: Vec::new(),
        }
    }
}
