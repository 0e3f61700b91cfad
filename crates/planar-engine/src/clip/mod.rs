//! Line clipping against an axis-aligned region (Cohen–Sutherland).
//!
//! Region boundaries are inclusive: a point on an edge is inside.

mod error;
mod outcode;

pub use error::ClipError;
pub use outcode::Outcode;

use crate::coords::{Rect, Vec2};
use crate::geometry::Line;

/// Upper bound on endpoint substitutions: one per region edge.
pub const MAX_SUBSTITUTIONS: usize = 4;

/// Clips `line` to `region`.
///
/// - `Ok(Some(line))`: the visible part (unchanged when fully inside)
/// - `Ok(None)`: nothing is visible
/// - `Err(ClipError::NotConverged)`: more than [`MAX_SUBSTITUTIONS`] substitutions
///
/// A zero-length segment resolves to itself when inside and to `None` when outside.
pub fn clip_line(line: Line, region: Rect) -> Result<Option<Line>, ClipError> {
    let region = region.normalized();
    if line.is_degenerate() {
        return Ok(Outcode::of(line.start, region).is_inside().then_some(line));
    }
    let (min, max) = (region.min(), region.max());

    let mut p0 = line.start;
    let mut p1 = line.end;
    let mut code0 = Outcode::of(p0, region);
    let mut code1 = Outcode::of(p1, region);

    let mut substitutions = 0;
    loop {
        if code0.is_inside() && code1.is_inside() {
            return Ok(Some(Line::new(p0, p1)));
        }
        if code0.intersects(code1) {
            return Ok(None);
        }
        if substitutions == MAX_SUBSTITUTIONS {
            return Err(ClipError::NotConverged { substitutions });
        }
        substitutions += 1;

        // Move whichever endpoint is outside onto the violated boundary.
        let outside = if code0.is_inside() { code1 } else { code0 };
        let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);

        // Divisors are non-zero: a violated bit shared by both endpoints was
        // rejected by the intersects() test above.
        let hit = if outside.contains(Outcode::TOP) {
            Vec2::new(p0.x + dx * (max.y - p0.y) / dy, max.y)
        } else if outside.contains(Outcode::BOTTOM) {
            Vec2::new(p0.x + dx * (min.y - p0.y) / dy, min.y)
        } else if outside.contains(Outcode::RIGHT) {
            Vec2::new(max.x, p0.y + dy * (max.x - p0.x) / dx)
        } else {
            Vec2::new(min.x, p0.y + dy * (min.x - p0.x) / dx)
        };

        if outside == code0 {
            p0 = hit;
            code0 = Outcode::of(p0, region);
        } else {
            p1 = hit;
            code1 = Outcode::of(p1, region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
        Line::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn close(a: Line, b: Line) -> bool {
        let eq = |p: Vec2, q: Vec2| (p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9;
        eq(a.start, b.start) && eq(a.end, b.end)
    }

    // ── trivial cases ─────────────────────────────────────────────────────

    #[test]
    fn fully_inside_is_unchanged() {
        let l = seg(10.0, 10.0, 90.0, 90.0);
        assert_eq!(clip_line(l, region()), Ok(Some(l)));
    }

    #[test]
    fn fully_outside_is_rejected() {
        assert_eq!(clip_line(seg(200.0, 200.0, 300.0, 300.0), region()), Ok(None));
    }

    #[test]
    fn segment_on_boundary_counts_as_inside() {
        let l = seg(0.0, 0.0, 0.0, 100.0);
        assert_eq!(clip_line(l, region()), Ok(Some(l)));
    }

    // ── partial ───────────────────────────────────────────────────────────

    #[test]
    fn crossing_left_edge() {
        let clipped = clip_line(seg(-10.0, 50.0, 50.0, 50.0), region()).unwrap().unwrap();
        assert_eq!(clipped, seg(0.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn crossing_two_edges_keeps_direction() {
        let clipped = clip_line(seg(-50.0, 50.0, 150.0, 50.0), region()).unwrap().unwrap();
        assert_eq!(clipped, seg(0.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn diagonal_through_corners() {
        let clipped = clip_line(seg(-10.0, -10.0, 110.0, 110.0), region()).unwrap().unwrap();
        assert!(close(clipped, seg(0.0, 0.0, 100.0, 100.0)), "{clipped:?}");
    }

    #[test]
    fn outside_in_different_regions_but_missing() {
        // Crosses the left and top zones without touching the region.
        assert_eq!(clip_line(seg(-10.0, 90.0, 10.0, 120.0), region()), Ok(None));
    }

    // ── degenerate ────────────────────────────────────────────────────────

    #[test]
    fn zero_length_inside_is_single_point() {
        let l = seg(5.0, 5.0, 5.0, 5.0);
        assert_eq!(clip_line(l, region()), Ok(Some(l)));
    }

    #[test]
    fn zero_length_on_boundary_is_kept() {
        let l = seg(100.0, 0.0, 100.0, 0.0);
        assert_eq!(clip_line(l, region()), Ok(Some(l)));
    }

    #[test]
    fn zero_length_outside_is_rejected() {
        assert_eq!(clip_line(seg(-5.0, 5.0, -5.0, 5.0), region()), Ok(None));
    }

    #[test]
    fn ndc_region_works() {
        let clipped = clip_line(seg(-2.0, 0.0, 0.0, 0.0), Rect::unit_ndc()).unwrap().unwrap();
        assert_eq!(clipped, seg(-1.0, 0.0, 0.0, 0.0));
    }
}
