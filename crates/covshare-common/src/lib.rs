pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, CovshareError, LayoutError, TableError};
pub use events::LayoutEvent;
pub use types::{Alignment, Color, Dimension, Extent, PaneSize, Rect};

pub type Result<T> = std::result::Result<T, CovshareError>;
