use crate::clip::ClipError;
use crate::coords::{Rect, Vec2};
use crate::geometry::{ObjectKind, Shape};
use crate::transform::{Mat3, MatrixTransform};

use super::{ObjectId, Scn};

/// A named, optionally hidden shape in the display list.
///
/// Object-space geometry is the only source of truth. The screen-space cache
/// is replaced wholesale by [`update_scn`](Self::update_scn) and narrowed by
/// [`clip`](Self::clip); any object-space mutation drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    id: ObjectId,
    name: String,
    /// Hidden objects are skipped by the frame pass but stay mutable.
    pub visible: bool,
    shape: Shape,
    scn: Option<Scn>,
}

impl Object {
    pub fn new(id: ObjectId, name: impl Into<String>, shape: impl Into<Shape>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            shape: shape.into(),
            scn: None,
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Current screen-space cache, if `update_scn` ran since the last mutation.
    #[inline]
    pub fn scn(&self) -> Option<&Scn> {
        self.scn.as_ref()
    }

    #[inline]
    pub fn centroid(&self) -> Vec2 {
        self.shape.centroid()
    }

    // ── object-space mutations ────────────────────────────────────────────

    /// Adds `delta` to every owned coordinate.
    pub fn translate(&mut self, delta: Vec2) {
        self.shape.map_points(|p| p + delta);
        self.scn = None;
    }

    /// Rotates about the centroid by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        self.rotate_about(angle, self.centroid());
    }

    pub fn rotate_about(&mut self, angle: f64, pivot: Vec2) {
        self.transform(&MatrixTransform::rotation_about(pivot, angle).matrix());
    }

    /// Scales about the centroid. Zero factors collapse the shape.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.scale_about(sx, sy, self.centroid());
    }

    pub fn scale_about(&mut self, sx: f64, sy: f64, pivot: Vec2) {
        self.transform(&MatrixTransform::scaling_about(pivot, sx, sy).matrix());
    }

    /// Applies an arbitrary matrix to the object-space geometry.
    pub fn transform(&mut self, m: &Mat3) {
        self.shape.apply(m);
        self.scn = None;
    }

    // ── screen-space cache ────────────────────────────────────────────────

    /// Recomputes the screen-space cache from object space through `m`.
    pub fn update_scn(&mut self, m: &Mat3) {
        self.scn = Some(Scn::project(&self.shape, m));
    }

    /// Clips the cache to `region`. Returns `true` when something is left to draw.
    ///
    /// Non-convergent clipping culls the object. Without a cache this is a no-op
    /// returning `false`.
    pub fn clip(&mut self, region: Rect) -> bool {
        let Some(scn) = self.scn.as_ref() else { return false };

        let clipped = self.settle_clip(scn.clipped(region));
        let visible = !clipped.is_culled();
        self.scn = Some(clipped);
        visible
    }

    /// A clipping failure culls the object rather than drawing unclipped geometry.
    fn settle_clip(&self, result: Result<Scn, ClipError>) -> Scn {
        result.unwrap_or_else(|e| {
            log::warn!("object {} ({}): {}; culled", self.id, self.name, e);
            Scn::Culled
        })
    }
}
