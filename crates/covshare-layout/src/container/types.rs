//! Container configuration, pane declarations, handlers, and the container
//! struct itself.

use std::collections::BTreeMap;
use std::fmt;

use covshare_common::types::{Alignment, Dimension, Extent, PaneSize};
use serde::{Deserialize, Serialize};

use crate::bus::{Publisher, ResizeBus, Subscription};
use crate::capture::{NoopCapture, PointerCapture};

/// Suffix of the publisher that reports the last pane.
pub const TRAILING_SUFFIX: &str = "-inv";

/// Name under which a container reports its last visible pane.
pub fn trailing_publisher_name(id: &str) -> String {
    format!("{id}{TRAILING_SUFFIX}")
}

/// Configuration for one layout container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Publisher name of this container.
    pub id: String,
    pub alignment: Alignment,
    /// Smallest width a pane can be resized to, in pixels.
    pub min_width: f64,
    /// Smallest height a pane can be resized to, in pixels.
    pub min_height: f64,
    /// Largest width a pane can be dragged to, in pixels.
    pub max_width: Option<f64>,
    /// Largest height a pane can be dragged to, in pixels.
    pub max_height: Option<f64>,
    /// Divider thickness in pixels.
    pub handle_size: f64,
    pub handle_color: String,
    /// Extra style entries for the host's divider rendering.
    pub handle_style: BTreeMap<String, String>,
    /// Grab area on each side of a divider, in pixels.
    pub hit_slop: f64,
    /// Which panes start hidden, by declaration order.
    pub hidden_panes: Vec<bool>,
    /// Containers whose first-pane size this container follows.
    pub connected_to: Vec<String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            alignment: Alignment::Horizontal,
            min_width: 0.0,
            min_height: 0.0,
            max_width: None,
            max_height: None,
            handle_size: 1.0,
            handle_color: "black".into(),
            handle_style: BTreeMap::new(),
            hit_slop: 5.0,
            hidden_panes: Vec::new(),
            connected_to: Vec::new(),
        }
    }
}

impl ContainerConfig {
    pub fn new(id: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            id: id.into(),
            alignment,
            ..Self::default()
        }
    }

    pub fn with_handle_size(mut self, handle_size: f64) -> Self {
        self.handle_size = handle_size;
        self
    }

    pub fn with_min(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    pub fn with_max(mut self, max_width: Option<f64>, max_height: Option<f64>) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn with_hidden(mut self, hidden: Vec<bool>) -> Self {
        self.hidden_panes = hidden;
        self
    }

    pub fn connected_to(mut self, publisher: impl Into<String>) -> Self {
        self.connected_to.push(publisher.into());
        self
    }

    /// Minimum pane size along the layout axis.
    pub fn min_along(&self) -> f64 {
        match self.alignment {
            Alignment::Horizontal => self.min_width,
            Alignment::Vertical => self.min_height,
        }
    }

    /// Maximum pane size along the layout axis.
    pub fn max_along(&self) -> Option<f64> {
        match self.alignment {
            Alignment::Horizontal => self.max_width,
            Alignment::Vertical => self.max_height,
        }
    }
}

/// One declared child.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSpec {
    pub label: String,
    pub width: Dimension,
    pub height: Dimension,
}

impl PaneSpec {
    pub fn auto(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// The requested size along the layout axis.
    pub fn requested(&self, alignment: Alignment) -> Dimension {
        match alignment {
            Alignment::Horizontal => self.width,
            Alignment::Vertical => self.height,
        }
    }
}

pub type SizesCallback = Box<dyn FnMut(&[PaneSize])>;

/// Callbacks fired with the current size list. Unset handlers are no-ops.
#[derive(Default)]
pub struct ResizeHandlers {
    pub on_resize_start: Option<SizesCallback>,
    pub on_resize: Option<SizesCallback>,
    pub on_resize_stop: Option<SizesCallback>,
}

impl ResizeHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_resize_start(mut self, f: impl FnMut(&[PaneSize]) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    pub fn on_resize(mut self, f: impl FnMut(&[PaneSize]) + 'static) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }

    pub fn on_resize_stop(mut self, f: impl FnMut(&[PaneSize]) + 'static) -> Self {
        self.on_resize_stop = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ResizeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHandlers")
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_stop", &self.on_resize_stop.is_some())
            .finish()
    }
}

/// Sizes captured when a drag begins, re-captured after every layout pass
/// that happens mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragState {
    /// Divider index among visible panes.
    pub divider: usize,
    /// Pane index before the divider.
    pub leading: usize,
    /// Pane index after the divider.
    pub trailing: usize,
    /// Pointer coordinate along the layout axis the sizes were captured at.
    pub origin: f64,
    /// Latest pointer coordinate along the layout axis.
    pub pointer: f64,
    pub leading_size: f64,
    pub trailing_size: f64,
}

/// N panes along one axis with draggable dividers between them.
pub struct LayoutContainer {
    pub(super) config: ContainerConfig,
    pub(super) panes: Vec<PaneSpec>,
    /// Hidden flags, always `panes.len()` long.
    pub(super) hidden: Vec<bool>,
    /// Resolved size along the layout axis, one per pane.
    pub(super) pixels: Vec<f64>,
    /// Sizes to return to when hidden panes come back.
    pub(super) preferred: Vec<f64>,
    /// Content box of the container.
    pub(super) extent: Extent,
    pub(super) initialized: bool,
    pub(super) drag: Option<DragState>,
    pub(super) handlers: ResizeHandlers,
    pub(super) capture: Box<dyn PointerCapture>,
    pub(super) leading_publisher: Publisher,
    pub(super) trailing_publisher: Publisher,
    /// Follow subscriptions; released when the container goes away.
    pub(super) links: Vec<Subscription>,
}

impl LayoutContainer {
    /// Create a container and register its publishers on `bus`.
    ///
    /// Sizes stay at zero until [`LayoutContainer::initialize`] runs with
    /// the measured content box.
    pub fn new(config: ContainerConfig, panes: Vec<PaneSpec>, bus: &ResizeBus) -> Self {
        let count = panes.len();
        let hidden = normalize_flags(&config.hidden_panes, count);
        let leading_publisher = bus.register(config.id.clone());
        let trailing_publisher = bus.register(trailing_publisher_name(&config.id));
        Self {
            config,
            panes,
            hidden,
            pixels: vec![0.0; count],
            preferred: vec![0.0; count],
            extent: Extent::default(),
            initialized: false,
            drag: None,
            handlers: ResizeHandlers::default(),
            capture: Box::new(NoopCapture),
            leading_publisher,
            trailing_publisher,
            links: Vec::new(),
        }
    }

    pub fn with_handlers(mut self, handlers: ResizeHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn with_capture(mut self, capture: impl PointerCapture + 'static) -> Self {
        self.capture = Box::new(capture);
        self
    }

    // -- Accessors --

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn panes(&self) -> &[PaneSpec] {
        &self.panes
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn hidden_panes(&self) -> &[bool] {
        &self.hidden
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|h| !**h).count()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Index of the divider being dragged, if any.
    pub fn active_divider(&self) -> Option<usize> {
        self.drag.map(|d| d.divider)
    }

    /// Resolved pane sizes along the layout axis, hidden panes as zero.
    pub fn pixel_sizes(&self) -> &[f64] {
        &self.pixels
    }

    /// Number of follow subscriptions currently held.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn attach_link(&mut self, subscription: Subscription) {
        self.links.push(subscription);
    }

    /// End any drag and drop follow subscriptions. Called on unmount.
    pub fn detach(&mut self) {
        self.end_drag();
        self.links.clear();
    }

    /// Total divider space along the layout axis.
    pub(super) fn divider_space(&self) -> f64 {
        self.visible_count().saturating_sub(1) as f64 * self.config.handle_size
    }

    /// Axis space left for panes once dividers are taken out.
    pub fn available(&self) -> f64 {
        (self.extent.along(self.config.alignment) - self.divider_space()).max(0.0)
    }
}

impl Drop for LayoutContainer {
    fn drop(&mut self) {
        self.end_drag();
    }
}

impl fmt::Debug for LayoutContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContainer")
            .field("id", &self.config.id)
            .field("alignment", &self.config.alignment)
            .field("pixels", &self.pixels)
            .field("hidden", &self.hidden)
            .field("extent", &self.extent)
            .field("dragging", &self.drag.is_some())
            .finish()
    }
}

/// Pad with `false` or truncate so there is one flag per pane.
pub(super) fn normalize_flags(flags: &[bool], len: usize) -> Vec<bool> {
    (0..len).map(|i| flags.get(i).copied().unwrap_or(false)).collect()
}
