use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A resolved width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size along the given layout axis.
    pub fn along(&self, alignment: Alignment) -> f64 {
        match alignment {
            Alignment::Horizontal => self.width,
            Alignment::Vertical => self.height,
        }
    }

    /// Size across the given layout axis.
    pub fn across(&self, alignment: Alignment) -> f64 {
        match alignment {
            Alignment::Horizontal => self.height,
            Alignment::Vertical => self.width,
        }
    }
}

/// Direction panes are laid out in.
///
/// `Horizontal` places panes side by side (dividers are vertical lines and
/// drags move along x). `Vertical` stacks them (drags move along y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Horizontal,
    Vertical,
}

impl Alignment {
    pub fn is_vertical(self) -> bool {
        matches!(self, Alignment::Vertical)
    }

    /// Pick the coordinate that runs along this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Alignment::Horizontal => x,
            Alignment::Vertical => y,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Horizontal => write!(f, "horizontal"),
            Alignment::Vertical => write!(f, "vertical"),
        }
    }
}
