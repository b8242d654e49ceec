//! Layout passes: initialize, container resize, hide/unhide, reset.

use covshare_common::types::Extent;
use tracing::debug;

use super::sizing::{distribute, scaled_requests, visible_indices};
use super::types::{normalize_flags, LayoutContainer};

impl LayoutContainer {
    /// Establish sizes from the declared requests for a measured content box.
    ///
    /// Every visible pane but the last gets its requested size (percentages
    /// of the available axis, pixel lengths capped at the container size);
    /// auto panes and the last pane share what is left.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.extent = Extent::new(width.max(0.0), height.max(0.0));
        if self.panes.is_empty() {
            return;
        }
        let requests = self.declared_requests();
        self.pixels = distribute(
            &requests,
            &self.hidden,
            self.available(),
            self.config.min_along(),
        );
        self.preferred = self.pixels.clone();
        self.initialized = true;
        self.rebase_drag();
        debug!(container = %self.config.id, sizes = ?self.pixels, "initialized");
        self.notify_resized();
    }

    /// Re-layout for a new content box, keeping every pane's share.
    pub fn on_container_resize(&mut self, width: f64, height: f64) {
        if self.panes.is_empty() {
            self.extent = Extent::new(width.max(0.0), height.max(0.0));
            return;
        }
        let previous = self.available();
        if !self.initialized || previous <= 0.0 {
            self.initialize(width, height);
            return;
        }

        self.extent = Extent::new(width.max(0.0), height.max(0.0));
        let factor = self.available() / previous;
        let requests = scaled_requests(&self.pixels, &self.hidden, factor);
        self.pixels = distribute(
            &requests,
            &self.hidden,
            self.available(),
            self.config.min_along(),
        );
        for (i, preferred) in self.preferred.iter_mut().enumerate() {
            *preferred = if self.hidden[i] {
                *preferred * factor
            } else {
                self.pixels[i]
            };
        }
        self.rebase_drag();
        debug!(container = %self.config.id, factor, sizes = ?self.pixels, "container resized");
        self.notify_resized();
    }

    /// Change which panes are hidden and re-layout the visible ones.
    ///
    /// Visible panes go back to their remembered sizes, so hiding and then
    /// unhiding a pane restores the earlier distribution. Flags are padded
    /// with `false` or truncated to the pane count.
    pub fn set_hidden_panes(&mut self, flags: &[bool]) {
        let hidden = normalize_flags(flags, self.panes.len());
        if hidden == self.hidden {
            return;
        }
        self.end_drag();
        self.hidden = hidden;
        self.config.hidden_panes = self.hidden.clone();
        if self.panes.is_empty() || !self.initialized {
            return;
        }

        let requests: Vec<f64> = self
            .preferred
            .iter()
            .zip(&self.hidden)
            .map(|(px, hidden)| if *hidden { 0.0 } else { *px })
            .collect();
        self.pixels = distribute(
            &requests,
            &self.hidden,
            self.available(),
            self.config.min_along(),
        );
        debug!(container = %self.config.id, hidden = ?self.hidden, sizes = ?self.pixels, "panes toggled");
        self.notify_resized();
    }

    /// Throw away drag adjustments and lay out from the declarations again.
    pub fn reset_sizes(&mut self) {
        let Extent { width, height } = self.extent;
        self.initialize(width, height);
    }

    /// Requested pixel size for each pane from its declaration.
    fn declared_requests(&self) -> Vec<f64> {
        let alignment = self.config.alignment;
        let axis = self.extent.along(alignment);
        let available = self.available();
        let visible = visible_indices(&self.hidden, self.panes.len());
        let last = visible.last().copied();
        self.panes
            .iter()
            .enumerate()
            .map(|(i, pane)| {
                if self.hidden[i] || Some(i) == last {
                    0.0
                } else {
                    pane.requested(alignment).to_pixels(axis, available)
                }
            })
            .collect()
    }
}
