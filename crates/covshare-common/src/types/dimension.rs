//! CSS-like length values used for pane sizes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::errors::LayoutError;

static DIMENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*\.?[0-9]+)\s*(px|%)?$").unwrap());

/// A length along one axis: a percentage, an absolute pixel count, or
/// unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    Percent(f64),
    Pixels(f64),
    #[default]
    Auto,
}

impl Dimension {
    /// Resolve to pixels.
    ///
    /// Percentages apply to `available` (the axis minus divider space) and
    /// pixel lengths are capped at `max`. `Auto` resolves to zero so the
    /// caller can treat it as "fill the leftover".
    pub fn to_pixels(self, max: f64, available: f64) -> f64 {
        let px = match self {
            Dimension::Percent(p) => (available * p / 100.0).min(max),
            Dimension::Pixels(px) => px.min(max),
            Dimension::Auto => 0.0,
        };
        px.max(0.0)
    }

    pub fn is_percent(self) -> bool {
        matches!(self, Dimension::Percent(_))
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl FromStr for Dimension {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            return Ok(Dimension::Auto);
        }
        let caps = DIMENSION_RE
            .captures(s)
            .ok_or_else(|| LayoutError::InvalidDimension(s.to_string()))?;
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| LayoutError::InvalidDimension(s.to_string()))?;
        match caps.get(2).map(|m| m.as_str()) {
            Some("%") => Ok(Dimension::Percent(value)),
            _ => Ok(Dimension::Pixels(value)),
        }
    }
}

impl TryFrom<String> for Dimension {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dimension> for String {
    fn from(value: Dimension) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Percent(p) => write!(f, "{}%", trim_float(*p)),
            Dimension::Pixels(px) => write!(f, "{}px", trim_float(*px)),
            Dimension::Auto => write!(f, "auto"),
        }
    }
}

/// Format without trailing noise: `145` rather than `145.0`, at most two
/// decimals otherwise.
fn trim_float(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

/// Width/height pair reported for one pane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaneSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl PaneSize {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}
