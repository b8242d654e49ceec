//! Divider drag lifecycle.

use tracing::debug;

use super::sizing::{drag_pair, visible_indices};
use super::types::{DragState, LayoutContainer};
use crate::handle::PointerEvent;

impl LayoutContainer {
    /// Start dragging the divider after the `divider`-th visible pane.
    ///
    /// Returns `false` (and does nothing) when the container is empty, not
    /// yet measured, or the divider does not exist. A drag already in
    /// progress is ended first.
    pub fn begin_drag(&mut self, divider: usize, x: f64, y: f64) -> bool {
        if self.panes.is_empty() || !self.initialized {
            return false;
        }
        let visible = visible_indices(&self.hidden, self.panes.len());
        if divider + 1 >= visible.len() {
            return false;
        }
        self.end_drag();

        let (leading, trailing) = (visible[divider], visible[divider + 1]);
        let origin = self.config.alignment.pick(x, y);
        self.drag = Some(DragState {
            divider,
            leading,
            trailing,
            origin,
            pointer: origin,
            leading_size: self.pixels[leading],
            trailing_size: self.pixels[trailing],
        });
        self.capture.acquire();
        debug!(container = %self.config.id, divider, leading, trailing, "drag started");

        let sizes = self.sizes();
        if let Some(handler) = self.handlers.on_resize_start.as_mut() {
            handler(&sizes);
        }
        true
    }

    /// Move the active divider to follow the pointer. Ignored when no drag
    /// is in progress.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let pointer = self.config.alignment.pick(x, y);
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.pointer = pointer;
        let drag = *drag;
        let delta = pointer - drag.origin;
        let (lead, trail) = drag_pair(
            drag.leading_size,
            drag.trailing_size,
            delta,
            self.config.handle_size,
            self.config.min_along(),
            self.config.max_along(),
        );
        if lead == self.pixels[drag.leading] && trail == self.pixels[drag.trailing] {
            return;
        }

        self.pixels[drag.leading] = lead;
        self.pixels[drag.trailing] = trail;
        self.preferred[drag.leading] = lead;
        self.preferred[drag.trailing] = trail;
        self.notify_resized();
    }

    /// Finish the active drag: release the capture and fire
    /// `on_resize_stop`. Returns `false` when nothing was being dragged.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        self.capture.release();
        debug!(container = %self.config.id, divider = drag.divider, sizes = ?self.pixels, "drag stopped");

        let sizes = self.sizes();
        if let Some(handler) = self.handlers.on_resize_stop.as_mut() {
            handler(&sizes);
        }
        true
    }

    /// Re-capture the dragged pair after a layout pass, so the next move
    /// starts from the new sizes at the current pointer position.
    pub(super) fn rebase_drag(&mut self) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.origin = drag.pointer;
        drag.leading_size = self.pixels[drag.leading];
        drag.trailing_size = self.pixels[drag.trailing];
    }

    /// Route a raw pointer event. Pointer-up and window blur both end the
    /// drag.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { divider, x, y } => {
                self.begin_drag(divider, x, y);
            }
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up | PointerEvent::Blur => {
                self.end_drag();
            }
        }
    }
}
