use std::f64::consts::TAU;

use crate::config::DEFAULT_POINT_RADIUS;
use crate::surface::{DrawSurface, scoped};
use crate::transform::Mat3;

use super::{Object, Scn};

impl Object {
    /// Draws the cached screen-space shape through `transform`.
    ///
    /// Points use [`DEFAULT_POINT_RADIUS`]. See [`draw_with_radius`](Self::draw_with_radius).
    pub fn draw<S>(&self, transform: &Mat3, surface: &mut S) -> Result<bool, S::Error>
    where
        S: DrawSurface + ?Sized,
    {
        self.draw_with_radius(transform, surface, DEFAULT_POINT_RADIUS)
    }

    /// Draws the cached screen-space shape through `transform`.
    ///
    /// Returns `Ok(false)` when there is nothing to draw (no cache, or culled).
    /// Visibility is not checked here; the display list skips hidden objects.
    /// Never touches object-space geometry, so a surface error leaves the
    /// object intact.
    pub fn draw_with_radius<S>(
        &self,
        transform: &Mat3,
        surface: &mut S,
        point_radius: f64,
    ) -> Result<bool, S::Error>
    where
        S: DrawSurface + ?Sized,
    {
        let Some(scn) = self.scn() else { return Ok(false) };

        match scn {
            Scn::Culled => return Ok(false),
            Scn::Point(p) => {
                let p = transform.apply(*p);
                scoped(surface, |s| {
                    s.arc(p.x, p.y, point_radius, 0.0, TAU)?;
                    s.fill()
                })?;
            }
            Scn::Line(l) => {
                let (a, b) = (transform.apply(l.start), transform.apply(l.end));
                scoped(surface, |s| {
                    s.move_to(a.x, a.y)?;
                    s.line_to(b.x, b.y)?;
                    s.stroke()
                })?;
            }
            Scn::Polygon { points, filled } => {
                let Some(&first) = points.first() else { return Ok(false) };
                let first = transform.apply(first);
                scoped(surface, |s| {
                    s.move_to(first.x, first.y)?;
                    for p in &points[1..] {
                        let p = transform.apply(*p);
                        s.line_to(p.x, p.y)?;
                    }
                    s.line_to(first.x, first.y)?;
                    if *filled {
                        s.stroke_preserve()?;
                        s.fill()
                    } else {
                        s.stroke()
                    }
                })?;
            }
        }

        log::trace!("drew {} {} ({})", self.kind(), self.id(), self.name());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::coords::Vec2;
    use crate::geometry::{Line, Polygon};
    use crate::object::ObjectId;
    use crate::surface::{RecordingSurface, SurfaceOp};

    // ── per-kind output ───────────────────────────────────────────────────

    #[test]
    fn point_draws_filled_circle() {
        let mut o = Object::new(ObjectId(1), "p", Vec2::new(3.0, 4.0));
        o.update_scn(&Mat3::identity());

        let mut s = RecordingSurface::new();
        assert!(o.draw_with_radius(&Mat3::translation(1.0, 1.0), &mut s, 5.0).unwrap());
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::Save,
                SurfaceOp::Arc { x: 4.0, y: 5.0, radius: 5.0, start: 0.0, end: TAU },
                SurfaceOp::Fill,
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn line_draws_stroked_segment() {
        let mut o = Object::new(ObjectId(1), "l", Line::from(((0.0, 0.0), (1.0, 2.0))));
        o.update_scn(&Mat3::scaling(10.0, 10.0));

        let mut s = RecordingSurface::new();
        o.draw(&Mat3::identity(), &mut s).unwrap();
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::Save,
                SurfaceOp::MoveTo { x: 0.0, y: 0.0 },
                SurfaceOp::LineTo { x: 10.0, y: 20.0 },
                SurfaceOp::Stroke,
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn polygon_path_returns_to_first_vertex() {
        let tri = Polygon::new(vec![Vec2::zero(), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)]).unwrap();
        let mut o = Object::new(ObjectId(1), "tri", tri);
        o.update_scn(&Mat3::identity());

        let mut s = RecordingSurface::new();
        o.draw(&Mat3::identity(), &mut s).unwrap();
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::Save,
                SurfaceOp::MoveTo { x: 0.0, y: 0.0 },
                SurfaceOp::LineTo { x: 2.0, y: 0.0 },
                SurfaceOp::LineTo { x: 0.0, y: 2.0 },
                SurfaceOp::LineTo { x: 0.0, y: 0.0 },
                SurfaceOp::Stroke,
                SurfaceOp::Restore,
            ]
        );
    }

    #[test]
    fn filled_polygon_strokes_then_fills() {
        let tri = Polygon::new(vec![Vec2::zero(), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)])
            .unwrap()
            .with_fill(true);
        let mut o = Object::new(ObjectId(1), "tri", tri);
        o.update_scn(&Mat3::identity());

        let mut s = RecordingSurface::new();
        o.draw(&Mat3::identity(), &mut s).unwrap();
        let tail: Vec<_> = s.ops().iter().rev().take(3).cloned().collect();
        assert_eq!(tail, vec![SurfaceOp::Restore, SurfaceOp::Fill, SurfaceOp::StrokePreserve]);
    }

    // ── nothing to draw ───────────────────────────────────────────────────

    #[test]
    fn draw_without_cache_is_noop() {
        let o = Object::new(ObjectId(1), "p", Vec2::zero());
        let mut s = RecordingSurface::new();
        assert!(!o.draw(&Mat3::identity(), &mut s).unwrap());
        assert!(s.ops().is_empty());
    }

    // ── failures ──────────────────────────────────────────────────────────

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("backend gone")
        }
    }

    impl std::error::Error for Broken {}

    /// Fails every stroke; counts restores.
    #[derive(Default)]
    struct FailingStroke {
        restores: usize,
    }

    impl DrawSurface for FailingStroke {
        type Error = Broken;
        fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) -> Result<(), Broken> { Ok(()) }
        fn move_to(&mut self, _: f64, _: f64) -> Result<(), Broken> { Ok(()) }
        fn line_to(&mut self, _: f64, _: f64) -> Result<(), Broken> { Ok(()) }
        fn fill(&mut self) -> Result<(), Broken> { Ok(()) }
        fn stroke(&mut self) -> Result<(), Broken> { Err(Broken) }
        fn stroke_preserve(&mut self) -> Result<(), Broken> { Err(Broken) }
        fn save(&mut self) -> Result<(), Broken> { Ok(()) }
        fn restore(&mut self) -> Result<(), Broken> {
            self.restores += 1;
            Ok(())
        }
    }

    #[test]
    fn surface_error_still_restores_and_keeps_geometry() {
        let mut o = Object::new(ObjectId(1), "l", Line::from(((0.0, 0.0), (1.0, 1.0))));
        o.update_scn(&Mat3::identity());
        let before = o.clone();

        let mut s = FailingStroke::default();
        assert!(o.draw(&Mat3::identity(), &mut s).is_err());
        assert_eq!(s.restores, 1);
        assert_eq!(o, before);
    }
}
