use core::fmt;

use crate::coords::Vec2;
use crate::transform::Mat3;

use super::{Line, Polygon};

/// Kind tag of a drawable object, derived from its [`Shape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ObjectKind {
    Point,
    Line,
    Polygon,
}

impl ObjectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Point => "Point",
            ObjectKind::Line => "Line",
            ObjectKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object-space geometry owned by a drawable object.
///
/// Extending the object model:
/// - add the primitive under `geometry::*`
/// - add a variant here and a matching one in `object::Scn`
/// - handle it in `Shape::map_points`, `Scn::project` and `Object::draw`
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Vec2),
    Line(Line),
    Polygon(Polygon),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Shape::Point(_) => ObjectKind::Point,
            Shape::Line(_) => ObjectKind::Line,
            Shape::Polygon(_) => ObjectKind::Polygon,
        }
    }

    /// Geometric center used as the pivot for rotate / scale.
    ///
    /// The point itself, the midpoint of a line, the vertex mean of a polygon.
    pub fn centroid(&self) -> Vec2 {
        match self {
            Shape::Point(p) => *p,
            Shape::Line(l) => l.midpoint(),
            Shape::Polygon(poly) => poly.centroid(),
        }
    }

    /// Every vertex in storage order.
    pub fn points(&self) -> Vec<Vec2> {
        match self {
            Shape::Point(p) => vec![*p],
            Shape::Line(l) => vec![l.start, l.end],
            Shape::Polygon(poly) => poly.points().to_vec(),
        }
    }

    /// Maps every owned coordinate through `f`.
    pub(crate) fn map_points(&mut self, mut f: impl FnMut(Vec2) -> Vec2) {
        match self {
            Shape::Point(p) => *p = f(*p),
            Shape::Line(l) => {
                l.start = f(l.start);
                l.end = f(l.end);
            }
            Shape::Polygon(poly) => poly.map_points(f),
        }
    }

    /// Applies `m` to every owned coordinate.
    pub(crate) fn apply(&mut self, m: &Mat3) {
        self.map_points(|p| m.apply(p));
    }

    /// Copy of the shape with `m` applied to every coordinate.
    pub fn transformed(&self, m: &Mat3) -> Shape {
        let mut out = self.clone();
        out.apply(m);
        out
    }
}

impl From<Vec2> for Shape {
    fn from(p: Vec2) -> Self {
        Shape::Point(p)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
