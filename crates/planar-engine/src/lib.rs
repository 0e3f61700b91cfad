//! Planar engine crate.
//!
//! Flat 2D display-list core: object-space shapes, the window-to-viewport
//! transform pipeline, Cohen–Sutherland line clipping, and polymorphic draw
//! dispatch through an injected drawing surface.

pub mod clip;
pub mod config;
pub mod coords;
pub mod geometry;
pub mod logging;
pub mod object;
pub mod scene;
pub mod surface;
pub mod transform;

pub use config::RenderConfig;
pub use coords::{Rect, Vec2, Viewport, Window};
pub use geometry::{GeometryError, Line, ObjectKind, Polygon, Shape};
pub use object::{Object, ObjectId, Scn};
pub use scene::{DisplayFile, FrameStats};
pub use surface::DrawSurface;
pub use transform::{Mat3, MatrixTransform};
