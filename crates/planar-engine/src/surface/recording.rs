use std::convert::Infallible;

use super::DrawSurface;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Fill,
    Stroke,
    StrokePreserve,
    Save,
    Restore,
}

/// Headless surface that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears recorded calls. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Takes the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of paint calls (`fill`, `stroke`, `stroke_preserve`).
    pub fn paint_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill | SurfaceOp::Stroke | SurfaceOp::StrokePreserve))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::Arc { x, y, radius, start, end });
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::LineTo { x, y });
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::Stroke);
        Ok(())
    }

    fn stroke_preserve(&mut self) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::StrokePreserve);
        Ok(())
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        self.ops.push(SurfaceOp::Restore);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::scoped;

    #[test]
    fn scoped_brackets_with_save_restore() {
        let mut s = RecordingSurface::new();
        scoped(&mut s, |s| {
            s.move_to(1.0, 2.0)?;
            s.stroke()
        })
        .unwrap();
        assert_eq!(
            s.ops(),
            &[SurfaceOp::Save, SurfaceOp::MoveTo { x: 1.0, y: 2.0 }, SurfaceOp::Stroke, SurfaceOp::Restore]
        );
        assert_eq!(s.paint_count(), 1);
    }

    #[test]
    fn take_empties_recorder() {
        let mut s = RecordingSurface::new();
        s.fill().unwrap();
        assert_eq!(s.take(), vec![SurfaceOp::Fill]);
        assert!(s.ops().is_empty());
    }
}
