//! Size queries and outgoing notifications.

use covshare_common::types::{Alignment, Dimension, Extent, PaneSize};
use tracing::trace;

use super::sizing::visible_indices;
use super::types::LayoutContainer;
use crate::handle::{compute_handles, find_handle, DragHandle};

impl LayoutContainer {
    /// Current sizes in each pane's declared unit.
    ///
    /// Percent-declared panes report their share of the available axis;
    /// everything else reports pixels. Across the axis every pane fills the
    /// container. Hidden panes report zero along the axis.
    pub fn sizes(&self) -> Vec<PaneSize> {
        let alignment = self.config.alignment;
        let available = self.available();
        self.panes
            .iter()
            .enumerate()
            .map(|(i, pane)| {
                let along = if self.hidden[i] {
                    Dimension::Pixels(0.0)
                } else if pane.requested(alignment).is_percent() && available > 0.0 {
                    Dimension::Percent(self.pixels[i] / available * 100.0)
                } else {
                    Dimension::Pixels(self.pixels[i])
                };
                let across = Dimension::Percent(100.0);
                match alignment {
                    Alignment::Horizontal => PaneSize::new(along, across),
                    Alignment::Vertical => PaneSize::new(across, along),
                }
            })
            .collect()
    }

    /// Pixel box of every pane, hidden ones collapsed along the axis.
    pub fn extents(&self) -> Vec<Extent> {
        let across = self.extent.across(self.config.alignment);
        self.pixels
            .iter()
            .map(|&px| self.axis_extent(px, across))
            .collect()
    }

    /// Divider geometry between the visible panes.
    pub fn handles(&self) -> Vec<DragHandle> {
        compute_handles(
            &self.pixels,
            &self.hidden,
            self.config.alignment,
            self.config.handle_size,
            self.extent.across(self.config.alignment),
            self.config.hit_slop,
        )
    }

    /// The divider whose grab zone contains `(x, y)`.
    pub fn handle_at(&self, x: f64, y: f64) -> Option<DragHandle> {
        find_handle(&self.handles(), x, y).cloned()
    }

    pub(super) fn axis_extent(&self, along: f64, across: f64) -> Extent {
        match self.config.alignment {
            Alignment::Horizontal => Extent::new(along, across),
            Alignment::Vertical => Extent::new(across, along),
        }
    }

    /// Publish the first and last visible pane, then run `on_resize`.
    pub(super) fn notify_resized(&mut self) {
        if self.panes.is_empty() {
            return;
        }
        self.publish();
        let sizes = self.sizes();
        if let Some(handler) = self.handlers.on_resize.as_mut() {
            handler(&sizes);
        }
    }

    fn publish(&self) {
        let visible = visible_indices(&self.hidden, self.panes.len());
        let (Some(&first), Some(&last)) = (visible.first(), visible.last()) else {
            return;
        };
        let across = self.extent.across(self.config.alignment);

        let leading = self.axis_extent(self.pixels[first], across);
        let trailing = self.axis_extent(
            (self.pixels[last] - self.config.handle_size).max(0.0),
            across,
        );
        trace!(container = %self.config.id, ?leading, ?trailing, "publish");
        self.leading_publisher.fire(leading.width, leading.height);
        self.trailing_publisher.fire(trailing.width, trailing.height);
    }
}
