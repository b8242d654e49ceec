pub mod bus;
pub mod capture;
pub mod container;
pub mod coordinator;
pub mod handle;

pub use bus::{Publisher, ResizeBus, Subscription};
pub use capture::{NoopCapture, PointerCapture};
pub use container::{ContainerConfig, LayoutContainer, PaneSpec, ResizeHandlers};
pub use coordinator::{LayoutCoordinator, SharedContainer};
pub use handle::{DragHandle, PointerEvent};
