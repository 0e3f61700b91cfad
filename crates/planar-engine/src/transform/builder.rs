use crate::coords::Vec2;

use super::{Mat3, TransformError};

/// Running transform composed from translate / rotate / scale steps.
///
/// Each call right-multiplies the running matrix, so steps are applied to
/// points in call order. Pivoting around a point `P` is always
/// `translate(-P)`, then the rotation or scale, then `translate(P)`;
/// [`rotation_about`](Self::rotation_about) and
/// [`scaling_about`](Self::scaling_about) build exactly that sequence.
///
/// `push` / `pop` save and restore the running matrix.
#[derive(Debug, Clone, Default)]
pub struct MatrixTransform {
    current: Mat3,
    saved: Vec<Mat3>,
}

impl MatrixTransform {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation by `angle` radians about `pivot`.
    pub fn rotation_about(pivot: Vec2, angle: f64) -> Self {
        let mut t = Self::new();
        t.translate(-pivot.x, -pivot.y)
            .rotate(angle)
            .translate(pivot.x, pivot.y);
        t
    }

    /// Scale by `(sx, sy)` about `pivot`.
    pub fn scaling_about(pivot: Vec2, sx: f64, sy: f64) -> Self {
        let mut t = Self::new();
        t.translate(-pivot.x, -pivot.y)
            .scale(sx, sy)
            .translate(pivot.x, pivot.y);
        t
    }

    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.then(Mat3::translation(dx, dy))
    }

    /// Rotation about the origin, `angle` in radians.
    #[inline]
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.then(Mat3::rotation(angle))
    }

    /// Scale about the origin. Zero factors are accepted and collapse geometry.
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.then(Mat3::scaling(sx, sy))
    }

    /// Appends an arbitrary matrix step.
    #[inline]
    pub fn then(&mut self, step: Mat3) -> &mut Self {
        self.current = self.current * step;
        self
    }

    /// The composed matrix.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.current
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.current.apply(p)
    }

    /// Resets the running matrix to identity. Saved matrices are kept.
    pub fn reset(&mut self) {
        self.current = Mat3::identity();
    }

    /// Saves the running matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the most recently saved matrix.
    pub fn pop(&mut self) -> Result<(), TransformError> {
        self.current = self.saved.pop().ok_or(TransformError::EmptyStack)?;
        Ok(())
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl From<MatrixTransform> for Mat3 {
    fn from(t: MatrixTransform) -> Mat3 {
        t.current
    }
}
