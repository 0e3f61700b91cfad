use crate::coords::Vec2;

/// Segment from `start` to `end`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn midpoint(self) -> Vec2 {
        self.start.midpoint(self.end)
    }

    /// True when both endpoints coincide.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

impl From<((f64, f64), (f64, f64))> for Line {
    fn from((a, b): ((f64, f64), (f64, f64))) -> Self {
        Line::new(a.into(), b.into())
    }
}
