//! Host seam for pointer capture during a divider drag.
//!
//! While a drag is in progress the host must route pointer-move,
//! pointer-up and window-blur events to the container, typically by
//! attaching global listeners. The container acquires the capture when a
//! drag begins and releases it on every way a drag can end: pointer-up,
//! blur, a new drag replacing the old one, or the container going away.

/// Attach/detach the host's global pointer listeners.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// Capture that does nothing. Used when the host delivers pointer events
/// unconditionally, and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::PointerCapture;

    /// Counts acquire/release calls through shared cells so a test can keep
    /// observing after handing the capture to a container.
    #[derive(Clone, Default)]
    pub struct CountingCapture {
        pub acquired: Rc<Cell<u32>>,
        pub released: Rc<Cell<u32>>,
    }

    impl CountingCapture {
        pub fn held(&self) -> bool {
            self.acquired.get() > self.released.get()
        }
    }

    impl PointerCapture for CountingCapture {
        fn acquire(&mut self) {
            self.acquired.set(self.acquired.get() + 1);
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingCapture;
    use super::*;

    #[test]
    fn noop_capture_is_inert() {
        let mut capture = NoopCapture;
        capture.acquire();
        capture.release();
    }

    #[test]
    fn counting_capture_tracks_balance() {
        let observer = CountingCapture::default();
        let mut capture: Box<dyn PointerCapture> = Box::new(observer.clone());
        capture.acquire();
        assert!(observer.held());
        capture.release();
        assert!(!observer.held());
        assert_eq!(observer.acquired.get(), 1);
        assert_eq!(observer.released.get(), 1);
    }
}
