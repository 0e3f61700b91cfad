use core::ops::BitOr;

use crate::coords::{Rect, Vec2};

/// 4-bit region code of a point relative to a clip rectangle.
///
/// `BOTTOM` means below `min.y`, `TOP` above `max.y`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Outcode(pub u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(0b0001);
    pub const RIGHT: Outcode = Outcode(0b0010);
    pub const BOTTOM: Outcode = Outcode(0b0100);
    pub const TOP: Outcode = Outcode(0b1000);

    /// Classifies `p` against an already-normalized `region`.
    pub fn of(p: Vec2, region: Rect) -> Outcode {
        let (min, max) = (region.min(), region.max());
        let mut code = Outcode::INSIDE;

        if p.x < min.x {
            code = code | Outcode::LEFT;
        } else if p.x > max.x {
            code = code | Outcode::RIGHT;
        }
        if p.y < min.y {
            code = code | Outcode::BOTTOM;
        } else if p.y > max.y {
            code = code | Outcode::TOP;
        }

        code
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Non-zero bitwise AND: both points share an outside half-plane.
    #[inline]
    pub const fn intersects(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Outcode;
    #[inline]
    fn bitor(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn codes_for_each_zone() {
        assert_eq!(Outcode::of(Vec2::new(5.0, 5.0), region()), Outcode::INSIDE);
        assert_eq!(Outcode::of(Vec2::new(-1.0, 5.0), region()), Outcode::LEFT);
        assert_eq!(Outcode::of(Vec2::new(11.0, 5.0), region()), Outcode::RIGHT);
        assert_eq!(Outcode::of(Vec2::new(5.0, -1.0), region()), Outcode::BOTTOM);
        assert_eq!(Outcode::of(Vec2::new(5.0, 11.0), region()), Outcode::TOP);
        assert_eq!(
            Outcode::of(Vec2::new(-1.0, 11.0), region()),
            Outcode::LEFT | Outcode::TOP
        );
    }

    #[test]
    fn edges_are_inside() {
        assert!(Outcode::of(Vec2::new(0.0, 10.0), region()).is_inside());
        assert!(Outcode::of(Vec2::new(10.0, 0.0), region()).is_inside());
    }

    #[test]
    fn intersects_requires_shared_bit() {
        assert!(Outcode::LEFT.intersects(Outcode::LEFT | Outcode::TOP));
        assert!(!Outcode::LEFT.intersects(Outcode::RIGHT));
    }
}
