//! Drag handles: the dividers between adjacent visible panes.
//!
//! A handle carries geometry only. It answers "is the pointer on me?" and
//! turns a press into a [`PointerEvent::Down`]; all size arithmetic lives
//! in the container.

use covshare_common::types::{Alignment, Rect};

// =============================================================================
// TYPES
// =============================================================================

/// Raw pointer input routed to a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the divider with the given index.
    Down { divider: usize, x: f64, y: f64 },
    /// Pointer moved while captured.
    Move { x: f64, y: f64 },
    /// Pointer released.
    Up,
    /// The window lost focus; treated as a release.
    Blur,
}

/// A divider between visible panes `index` and `index + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DragHandle {
    /// Divider index, counted among visible panes.
    pub index: usize,
    pub alignment: Alignment,
    /// Start of the divider along the layout axis.
    pub offset: f64,
    /// Divider thickness along the layout axis.
    pub thickness: f64,
    /// Length of the divider across the layout axis.
    pub span: f64,
    /// Extra grab area on each side of the divider.
    pub hit_slop: f64,
}

impl DragHandle {
    /// Grab area added on each side; the rendered handle is 10px thicker
    /// than the divider it sits on.
    pub const DEFAULT_HIT_SLOP: f64 = 5.0;

    /// The divider's own rectangle in container coordinates.
    pub fn rect(&self) -> Rect {
        self.rect_with(0.0)
    }

    /// The rectangle that accepts presses.
    pub fn hit_rect(&self) -> Rect {
        self.rect_with(self.hit_slop)
    }

    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        self.hit_rect().contains(x, y)
    }

    /// Report a press on this handle.
    pub fn press(&self, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            divider: self.index,
            x,
            y,
        }
    }

    fn rect_with(&self, slop: f64) -> Rect {
        let start = self.offset - slop;
        let thickness = self.thickness + 2.0 * slop;
        match self.alignment {
            Alignment::Horizontal => Rect {
                x: start,
                y: 0.0,
                width: thickness,
                height: self.span,
            },
            Alignment::Vertical => Rect {
                x: 0.0,
                y: start,
                width: self.span,
                height: thickness,
            },
        }
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// Place a handle after every visible pane except the last.
pub fn compute_handles(
    pixels: &[f64],
    hidden: &[bool],
    alignment: Alignment,
    thickness: f64,
    span: f64,
    hit_slop: f64,
) -> Vec<DragHandle> {
    let visible: Vec<f64> = pixels
        .iter()
        .enumerate()
        .filter(|(i, _)| !hidden.get(*i).copied().unwrap_or(false))
        .map(|(_, px)| *px)
        .collect();

    let mut handles = Vec::with_capacity(visible.len().saturating_sub(1));
    let mut position = 0.0;
    for (index, size) in visible.iter().enumerate() {
        position += size;
        if index + 1 < visible.len() {
            handles.push(DragHandle {
                index,
                alignment,
                offset: position,
                thickness,
                span,
                hit_slop,
            });
            position += thickness;
        }
    }
    handles
}

/// Find the handle under the pointer.
pub fn find_handle(handles: &[DragHandle], x: f64, y: f64) -> Option<&DragHandle> {
    handles.iter().find(|h| h.hit_test(x, y))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_handle() -> DragHandle {
        DragHandle {
            index: 0,
            alignment: Alignment::Horizontal,
            offset: 145.0,
            thickness: 10.0,
            span: 200.0,
            hit_slop: DragHandle::DEFAULT_HIT_SLOP,
        }
    }

    #[test]
    fn single_pane_has_no_handles() {
        let handles = compute_handles(&[300.0], &[false], Alignment::Horizontal, 10.0, 200.0, 5.0);
        assert!(handles.is_empty());
    }

    #[test]
    fn two_panes_one_handle() {
        let handles = compute_handles(
            &[145.0, 145.0],
            &[false, false],
            Alignment::Horizontal,
            10.0,
            200.0,
            5.0,
        );
        assert_eq!(handles.len(), 1);
        assert_eq!(handles[0].index, 0);
        assert!((handles[0].offset - 145.0).abs() < 0.001);
    }

    #[test]
    fn hidden_panes_are_skipped() {
        // [100 | hidden | 190]: a single handle between the visible panes.
        let handles = compute_handles(
            &[100.0, 0.0, 190.0],
            &[false, true, false],
            Alignment::Vertical,
            10.0,
            50.0,
            5.0,
        );
        assert_eq!(handles.len(), 1);
        assert!((handles[0].offset - 100.0).abs() < 0.001);
    }

    #[test]
    fn three_panes_offsets_include_thickness() {
        let handles = compute_handles(
            &[100.0, 100.0, 80.0],
            &[false, false, false],
            Alignment::Horizontal,
            10.0,
            50.0,
            0.0,
        );
        assert_eq!(handles.len(), 2);
        assert!((handles[0].offset - 100.0).abs() < 0.001);
        assert!((handles[1].offset - 210.0).abs() < 0.001);
    }

    #[test]
    fn hit_test_horizontal_handle() {
        let handle = sample_handle();
        // Divider spans x 145..155, grab zone 140..160.
        assert!(handle.hit_test(150.0, 100.0));
        assert!(handle.hit_test(141.0, 100.0));
        assert!(handle.hit_test(159.0, 100.0));
        assert!(!handle.hit_test(139.0, 100.0));
        assert!(!handle.hit_test(161.0, 100.0));
        assert!(!handle.hit_test(150.0, 201.0));
    }

    #[test]
    fn hit_test_vertical_handle() {
        let handle = DragHandle {
            alignment: Alignment::Vertical,
            ..sample_handle()
        };
        assert!(handle.hit_test(100.0, 150.0));
        assert!(!handle.hit_test(100.0, 170.0));
    }

    #[test]
    fn press_reports_divider() {
        let handle = DragHandle {
            index: 2,
            ..sample_handle()
        };
        assert_eq!(
            handle.press(150.0, 10.0),
            PointerEvent::Down {
                divider: 2,
                x: 150.0,
                y: 10.0
            }
        );
    }

    #[test]
    fn find_handle_hit_and_miss() {
        let handles = vec![sample_handle()];
        assert!(find_handle(&handles, 150.0, 10.0).is_some());
        assert!(find_handle(&handles, 10.0, 10.0).is_none());
        assert!(find_handle(&[], 0.0, 0.0).is_none());
    }
}
