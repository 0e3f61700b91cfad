use crate::geometry::GeometryError;
use crate::transform::{Mat3, MatrixTransform};

use super::Vec2;

/// World-space region being viewed.
///
/// The window may be rotated; `pan` moves it along its own rotated axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Window {
    center: Vec2,
    width: f64,
    height: f64,
    /// Radians.
    angle: f64,
}

impl Window {
    pub fn new(center: Vec2, width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GeometryError::InvalidExtent { width, height });
        }
        if !center.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { center, width, height, angle: 0.0 })
    }

    /// Window spanning two world corners.
    pub fn from_corners(min: Vec2, max: Vec2) -> Result<Self, GeometryError> {
        Self::new(min.midpoint(max), (max.x - min.x).abs(), (max.y - min.y).abs())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Moves the window by `delta`, expressed in the window's own axes.
    pub fn pan(&mut self, delta: Vec2) {
        self.center = self.center + Mat3::rotation(self.angle).apply(delta);
    }

    /// Zooms by `factor`; values above 1 zoom in (the window shrinks).
    ///
    /// The window is left unchanged when the resulting extent would not be
    /// positive and finite.
    pub fn zoom(&mut self, factor: f64) -> Result<(), GeometryError> {
        if !(factor > 0.0 && factor.is_finite()) {
            return Err(GeometryError::InvalidZoom(factor));
        }
        let (width, height) = (self.width / factor, self.height / factor);
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(GeometryError::InvalidExtent { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Rotates the window by `angle` radians around its center.
    pub fn rotate(&mut self, angle: f64) {
        self.angle += angle;
    }

    /// World to normalized transform; the window maps onto `[-1, 1]²`.
    pub fn normalize(&self) -> Mat3 {
        let mut t = MatrixTransform::new();
        t.translate(-self.center.x, -self.center.y)
            .rotate(-self.angle)
            .scale(2.0 / self.width, 2.0 / self.height);
        t.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn window() -> Window {
        Window::from_corners(Vec2::new(0.0, 0.0), Vec2::new(200.0, 100.0)).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_degenerate_extent() {
        assert_eq!(
            Window::new(Vec2::zero(), 0.0, 5.0),
            Err(GeometryError::InvalidExtent { width: 0.0, height: 5.0 })
        );
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn corners_map_to_unit_square() {
        let m = window().normalize();
        assert!(close(m.apply(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0)));
        assert!(close(m.apply(Vec2::new(200.0, 100.0)), Vec2::new(1.0, 1.0)));
        assert!(close(m.apply(Vec2::new(100.0, 50.0)), Vec2::zero()));
    }

    #[test]
    fn rotated_window_turns_world_the_other_way() {
        let mut w = Window::new(Vec2::zero(), 2.0, 2.0).unwrap();
        w.rotate(FRAC_PI_2);
        // The window's +x axis now points along world +y.
        assert!(close(w.normalize().apply(Vec2::new(0.0, 1.0)), Vec2::new(1.0, 0.0)));
    }

    // ── navigation ────────────────────────────────────────────────────────

    #[test]
    fn pan_follows_window_axes() {
        let mut w = Window::new(Vec2::zero(), 2.0, 2.0).unwrap();
        w.rotate(FRAC_PI_2);
        w.pan(Vec2::new(1.0, 0.0));
        assert!(close(w.center(), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn zoom_in_shrinks_window() {
        let mut w = window();
        w.zoom(2.0).unwrap();
        assert_eq!((w.width(), w.height()), (100.0, 50.0));
        assert_eq!(w.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn zoom_rejects_non_positive_factor() {
        let mut w = window();
        assert_eq!(w.zoom(0.0), Err(GeometryError::InvalidZoom(0.0)));
        assert_eq!(w.width(), 200.0);
    }

    #[test]
    fn zoom_out_past_finite_extent_is_rejected() {
        let mut w = window();
        assert!(matches!(w.zoom(1e-307), Err(GeometryError::InvalidExtent { .. })));
        assert_eq!((w.width(), w.height()), (200.0, 100.0));
        assert!(w.normalize().inverse().is_some());
    }

    #[test]
    fn zoom_in_past_representable_extent_is_rejected() {
        let mut w = Window::new(Vec2::zero(), 1e-300, 1e-300).unwrap();
        // 1e-330 underflows to zero.
        assert!(matches!(w.zoom(1e30), Err(GeometryError::InvalidExtent { .. })));
        assert_eq!((w.width(), w.height()), (1e-300, 1e-300));
    }
}
