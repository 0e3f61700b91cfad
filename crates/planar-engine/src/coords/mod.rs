//! Coordinate types and the window-to-viewport pipeline.
//!
//! Spaces:
//! - object (world) space: where shapes store their vertices
//! - normalized space: the [`Window`] mapped onto `[-1, 1]²`, +Y up
//! - device space: the [`Viewport`] rectangle on the drawing surface, +Y down
//!
//! `Window::normalize` takes world to normalized space and
//! `Viewport::ndc_to_device` takes normalized to device space.

mod rect;
mod vec2;
mod viewport;
mod window;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
pub use window::Window;
