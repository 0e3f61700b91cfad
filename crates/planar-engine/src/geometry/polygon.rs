use crate::coords::Vec2;

use super::GeometryError;

pub const MIN_POLYGON_VERTICES: usize = 3;

/// Closed polygon. Vertex order defines the edges; the last vertex connects
/// back to the first.
///
/// Always holds at least [`MIN_POLYGON_VERTICES`] finite vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    /// Fill the interior when drawn (the outline is always stroked).
    pub filled: bool,
}

impl Polygon {
    pub fn new(points: impl Into<Vec<Vec2>>) -> Result<Self, GeometryError> {
        let points = points.into();
        if points.len() < MIN_POLYGON_VERTICES {
            return Err(GeometryError::TooFewVertices { found: points.len() });
        }
        if !points.iter().all(|p| p.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { points, filled: false })
    }

    #[inline]
    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vec2 {
        let sum = self.points.iter().fold(Vec2::zero(), |acc, &p| acc + p);
        sum / self.points.len() as f64
    }

    /// Applies `f` to every vertex in place. Vertex count is preserved.
    pub(crate) fn map_points(&mut self, mut f: impl FnMut(Vec2) -> Vec2) {
        for p in &mut self.points {
            *p = f(*p);
        }
    }
}
