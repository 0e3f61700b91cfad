//! Frame-pass configuration.

use crate::coords::Rect;

/// Point marker radius in device units.
pub const DEFAULT_POINT_RADIUS: f64 = 2.0;

/// Per-frame rendering options for [`DisplayFile::render`](crate::scene::DisplayFile::render).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Radius of the filled circle drawn for point objects.
    pub point_radius: f64,
    /// Clip region in normalized space. The full window is `[-1, 1]²`.
    pub clip_region: Rect,
    /// Clip lines against `clip_region` before drawing.
    pub clipping: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            point_radius: DEFAULT_POINT_RADIUS,
            clip_region: Rect::unit_ndc(),
            clipping: true,
        }
    }
}

impl RenderConfig {
    /// Shrinks the clip region by `margin` on every side (normalized units).
    ///
    /// Useful to make clipping visible inside the viewport.
    pub fn with_clip_margin(mut self, margin: f64) -> Self {
        let r = Rect::unit_ndc();
        self.clip_region = Rect::new(
            r.origin.x + margin,
            r.origin.y + margin,
            (r.size.x - 2.0 * margin).max(0.0),
            (r.size.y - 2.0 * margin).max(0.0),
        );
        self
    }
}
