use serde::{Deserialize, Serialize};

use crate::types::PaneSize;

/// Observable record of a layout state change.
///
/// Containers report through callbacks; hosts that want a log (the demo
/// binary prints one JSON line per event) convert those callbacks into
/// these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LayoutEvent {
    ResizeStarted {
        container: String,
        sizes: Vec<PaneSize>,
    },
    Resized {
        container: String,
        sizes: Vec<PaneSize>,
    },
    ResizeStopped {
        container: String,
        sizes: Vec<PaneSize>,
    },
    Broadcast {
        publisher: String,
        width: f64,
        height: f64,
    },
    Unmounted {
        container: String,
    },
    #[serde(other)]
    Unknown,
}

impl LayoutEvent {
    /// Name of the container the event concerns, if any.
    pub fn container(&self) -> Option<&str> {
        match self {
            LayoutEvent::ResizeStarted { container, .. }
            | LayoutEvent::Resized { container, .. }
            | LayoutEvent::ResizeStopped { container, .. }
            | LayoutEvent::Unmounted { container } => Some(container),
            LayoutEvent::Broadcast { .. } | LayoutEvent::Unknown => None,
        }
    }
}
