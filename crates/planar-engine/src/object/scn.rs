use crate::clip::{self, ClipError};
use crate::coords::{Rect, Vec2};
use crate::geometry::{Line, Shape};
use crate::transform::Mat3;

/// Screen-space cache of an object.
///
/// Always derived from object-space geometry: built by [`Scn::project`] and
/// narrowed by [`Scn::clipped`], never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Scn {
    Point(Vec2),
    Line(Line),
    Polygon { points: Vec<Vec2>, filled: bool },
    /// Nothing left to draw after clipping.
    Culled,
}

impl Scn {
    /// Projects object-space `shape` through `m`.
    pub fn project(shape: &Shape, m: &Mat3) -> Scn {
        match shape {
            Shape::Point(p) => Scn::Point(m.apply(*p)),
            Shape::Line(l) => Scn::Line(Line::new(m.apply(l.start), m.apply(l.end))),
            Shape::Polygon(poly) => Scn::Polygon {
                points: poly.points().iter().map(|&p| m.apply(p)).collect(),
                filled: poly.filled,
            },
        }
    }

    /// Restricts the cache to `region`.
    ///
    /// Only lines are clipped; points and polygons pass through unchanged.
    pub fn clipped(&self, region: Rect) -> Result<Scn, ClipError> {
        match self {
            Scn::Line(l) => Ok(match clip::clip_line(*l, region)? {
                Some(visible) => Scn::Line(visible),
                None => Scn::Culled,
            }),
            other => Ok(other.clone()),
        }
    }

    #[inline]
    pub fn is_culled(&self) -> bool {
        matches!(self, Scn::Culled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    #[test]
    fn project_keeps_polygon_fill_flag() {
        let poly = Polygon::new(vec![Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
            .unwrap()
            .with_fill(true);
        let scn = Scn::project(&Shape::Polygon(poly), &Mat3::scaling(2.0, 2.0));
        assert_eq!(
            scn,
            Scn::Polygon {
                points: vec![Vec2::zero(), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)],
                filled: true,
            }
        );
    }

    #[test]
    fn clipped_line_outside_is_culled() {
        let scn = Scn::Line(Line::from(((2.0, 2.0), (3.0, 3.0))));
        assert!(scn.clipped(Rect::unit_ndc()).unwrap().is_culled());
    }

    #[test]
    fn clipped_point_passes_through() {
        let scn = Scn::Point(Vec2::new(5.0, 5.0));
        assert_eq!(scn.clipped(Rect::unit_ndc()).unwrap(), scn);
    }
}
