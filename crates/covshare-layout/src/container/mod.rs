//! The layout container: N panes along one axis with draggable dividers.
//!
//! A container keeps one pixel size per declared pane. After every state
//! change the visible sizes plus the dividers between them fill the content
//! box exactly, and the container publishes its first and last visible pane
//! on the resize bus before running its `on_resize` handler.

mod drag;
mod operations;
mod report;
mod sizing;
mod types;

pub use types::*;
