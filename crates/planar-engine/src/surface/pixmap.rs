use std::fmt;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::DrawSurface;

/// Line segments used to approximate a full circle.
const ARC_SEGMENTS_PER_TURN: f64 = 64.0;

/// Errors raised by [`PixmapSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PixmapError {
    /// Zero or oversized pixmap dimensions.
    InvalidSize { width: u32, height: u32 },
    /// `restore` without a matching `save`.
    UnbalancedRestore,
}

impl fmt::Display for PixmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixmapError::InvalidSize { width, height } => {
                write!(f, "cannot allocate a {}x{} pixmap", width, height)
            }
            PixmapError::UnbalancedRestore => write!(f, "restore called without matching save"),
        }
    }
}

impl std::error::Error for PixmapError {}

#[derive(Debug, Copy, Clone)]
struct GraphicsState {
    stroke_rgba: [u8; 4],
    fill_rgba: [u8; 4],
    line_width: f32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            stroke_rgba: [0, 0, 0, 255],
            fill_rgba: [0, 0, 0, 255],
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
}

/// Raster surface backed by a `tiny_skia::Pixmap`.
pub struct PixmapSurface {
    pixmap: Pixmap,
    path: Vec<PathCmd>,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl PixmapSurface {
    /// Allocates a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, PixmapError> {
        let pixmap = Pixmap::new(width, height).ok_or(PixmapError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            path: Vec::new(),
            state: GraphicsState::default(),
            saved: Vec::new(),
        })
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Fills the whole pixmap with an opaque color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    pub fn set_stroke_color(&mut self, rgba: [u8; 4]) {
        self.state.stroke_rgba = rgba;
    }

    pub fn set_fill_color(&mut self, rgba: [u8; 4]) {
        self.state.fill_rgba = rgba;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width.max(0.0);
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for cmd in &self.path {
            match *cmd {
                PathCmd::MoveTo(x, y) => pb.move_to(x, y),
                PathCmd::LineTo(x, y) => pb.line_to(x, y),
            }
        }
        pb.finish()
    }

    fn paint(rgba: [u8; 4]) -> Paint<'static> {
        let mut paint = Paint::default();
        let [r, g, b, a] = rgba;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn stroke_current(&mut self) {
        let Some(path) = self.build_path() else { return };
        let paint = Self::paint(self.state.stroke_rgba);
        let stroke = Stroke {
            width: self.state.line_width,
            ..Default::default()
        };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

impl DrawSurface for PixmapSurface {
    type Error = PixmapError;

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), PixmapError> {
        let sweep = end - start;
        let steps = ((sweep.abs() / std::f64::consts::TAU) * ARC_SEGMENTS_PER_TURN)
            .ceil()
            .max(1.0) as usize;

        for i in 0..=steps {
            let t = start + sweep * (i as f64 / steps as f64);
            let px = (x + radius * t.cos()) as f32;
            let py = (y + radius * t.sin()) as f32;
            // Joins the current path like cairo: only the very first point moves.
            if i == 0 && self.path.is_empty() {
                self.path.push(PathCmd::MoveTo(px, py));
            } else {
                self.path.push(PathCmd::LineTo(px, py));
            }
        }
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), PixmapError> {
        self.path.push(PathCmd::MoveTo(x as f32, y as f32));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), PixmapError> {
        if self.path.is_empty() {
            self.path.push(PathCmd::MoveTo(x as f32, y as f32));
        } else {
            self.path.push(PathCmd::LineTo(x as f32, y as f32));
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<(), PixmapError> {
        if let Some(path) = self.build_path() {
            let paint = Self::paint(self.state.fill_rgba);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        self.path.clear();
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), PixmapError> {
        self.stroke_current();
        self.path.clear();
        Ok(())
    }

    fn stroke_preserve(&mut self) -> Result<(), PixmapError> {
        self.stroke_current();
        Ok(())
    }

    fn save(&mut self) -> Result<(), PixmapError> {
        self.saved.push(self.state);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), PixmapError> {
        self.state = self.saved.pop().ok_or(PixmapError::UnbalancedRestore)?;
        Ok(())
    }
}
