use crate::geometry::GeometryError;
use crate::transform::{Mat3, MatrixTransform};

use super::{Rect, Vec2};

/// Device-space rectangle the normalized square is mapped onto.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the device origin.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { origin: Vec2::zero(), width, height }
    }

    #[inline]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Validating constructor.
    pub fn try_new(origin: Vec2, width: f64, height: f64) -> Result<Self, GeometryError> {
        let vp = Self { origin, width, height };
        if !vp.is_valid() {
            return Err(GeometryError::InvalidExtent { width, height });
        }
        Ok(vp)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.origin.is_finite()
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(self.origin, Vec2::new(self.width, self.height))
    }

    /// Normalized `[-1, 1]²` (+Y up) to device pixels (+Y down).
    ///
    /// `(-1, 1)` lands on `origin`, `(1, -1)` on `origin + (width, height)`.
    pub fn ndc_to_device(self) -> Mat3 {
        let mut t = MatrixTransform::new();
        t.scale(self.width / 2.0, -self.height / 2.0).translate(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        );
        t.matrix()
    }
}
