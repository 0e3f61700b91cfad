//! Drawable objects.
//!
//! An [`Object`] pairs identity metadata with exactly one object-space
//! [`Shape`](crate::geometry::Shape) and a derived screen-space cache ([`Scn`]).
//!
//! Per-frame sequence:
//! 1. object-space mutations (`translate` / `rotate` / `scale`), any number
//! 2. `update_scn` with the current normalization transform
//! 3. optional `clip` against the clip region
//! 4. `draw` through the device transform, repeatable

mod draw;
mod drawable;
mod id;
mod scn;

pub use drawable::Object;
pub use id::ObjectId;
pub use scn::Scn;
