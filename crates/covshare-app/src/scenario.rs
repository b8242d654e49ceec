//! Scenario files: a window, the containers mounted in it, and the input
//! steps replayed against them.
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//!
//! [[container]]
//! id = "main"
//! handle_size = 4
//! [[container.pane]]
//! label = "map"
//! width = "70%"
//! [[container.pane]]
//! label = "stats"
//!
//! [[step]]
//! action = "press"
//! container = "main"
//! x = 895
//! y = 100
//! ```

use std::path::Path;

use covshare_common::types::{Dimension, Extent};
use covshare_common::{ConfigError, CovshareError, LayoutError};
use covshare_config::colors::parse_color;
use covshare_config::validation::validate_container;
use covshare_config::{ContainerSchema, LayoutDefaults};
use covshare_layout::{ContainerConfig, PaneSpec};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub window: Window,
    #[serde(rename = "container")]
    pub containers: Vec<ContainerSchema>,
    #[serde(rename = "step")]
    pub steps: Vec<Step>,
}

/// Size of the host window every container box is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Window {
    pub width: f64,
    pub height: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// One replayed input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Resize the window, or one container's box when `container` is set.
    Resize {
        #[serde(default)]
        container: Option<String>,
        width: f64,
        height: f64,
    },
    /// Press a divider. Without `divider` the press is hit-tested.
    Press {
        container: String,
        #[serde(default)]
        divider: Option<usize>,
        x: f64,
        y: f64,
    },
    Move {
        container: String,
        x: f64,
        y: f64,
    },
    Release {
        container: String,
    },
    Blur {
        container: String,
    },
    Hide {
        container: String,
        hidden: Vec<bool>,
    },
    Reset {
        container: String,
    },
    Unmount {
        container: String,
    },
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, CovshareError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// Parse and validate scenario TOML.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        if scenario.window.width < 0.0 || scenario.window.height < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "window size {}x{} must not be negative",
                scenario.window.width, scenario.window.height
            )));
        }
        for container in &scenario.containers {
            validate_container(container)?;
        }
        Ok(scenario)
    }
}

/// Container options with unset values taken from `defaults`. The handle
/// color is normalized to hex.
pub fn container_config(schema: &ContainerSchema, defaults: &LayoutDefaults) -> ContainerConfig {
    let color = schema.handle_color.as_deref().unwrap_or(&defaults.handle_color);
    ContainerConfig {
        id: schema.id.clone(),
        alignment: schema.alignment,
        min_width: schema.min_width.unwrap_or(defaults.min_width),
        min_height: schema.min_height.unwrap_or(defaults.min_height),
        max_width: schema.max_width,
        max_height: schema.max_height,
        handle_size: schema.handle_size.unwrap_or(defaults.handle_size),
        handle_color: parse_color(color)
            .map(|c| c.to_hex())
            .unwrap_or_else(|_| color.to_string()),
        handle_style: schema.handle_style.clone(),
        hit_slop: schema.hit_slop.unwrap_or(defaults.hit_slop),
        hidden_panes: schema.hidden.clone(),
        connected_to: schema.connected_to.clone(),
    }
}

pub fn pane_specs(schema: &ContainerSchema) -> Result<Vec<PaneSpec>, LayoutError> {
    schema
        .panes
        .iter()
        .map(|pane| {
            Ok(PaneSpec::auto(pane.label.clone())
                .with_width(pane.width.parse()?)
                .with_height(pane.height.parse()?))
        })
        .collect()
}

/// The container's content box inside `window`. `auto` fills the window.
pub fn content_box(schema: &ContainerSchema, window: Window) -> Result<Extent, LayoutError> {
    Ok(Extent::new(
        resolve(&schema.width, window.width)?,
        resolve(&schema.height, window.height)?,
    ))
}

fn resolve(value: &str, window: f64) -> Result<f64, LayoutError> {
    let dimension: Dimension = value.parse()?;
    Ok(if dimension.is_auto() {
        window
    } else {
        dimension.to_pixels(window, window)
    })
}
