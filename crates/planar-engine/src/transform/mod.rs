//! Homogeneous 2D transforms.
//!
//! Convention (used by every caller in the crate):
//! - points are row vectors `[x, y, 1]`
//! - a point is transformed as `[x, y, 1] · M`
//! - the builder right-multiplies (`M ← M · T`), so operations apply in call order
//!
//! Angles are in radians; positive angles turn counter-clockwise in a y-up frame.

mod builder;
mod error;
mod matrix;

pub use builder::MatrixTransform;
pub use error::TransformError;
pub use matrix::Mat3;
