//! Geometry primitives held in object space.
//!
//! A point is a plain [`Vec2`](crate::coords::Vec2); lines and polygons wrap
//! their vertices. [`Shape`] is the closed set of primitives an object can own.

mod error;
mod line;
mod polygon;
mod shape;

pub use error::GeometryError;
pub use line::Line;
pub use polygon::{Polygon, MIN_POLYGON_VERTICES};
pub use shape::{ObjectKind, Shape};
