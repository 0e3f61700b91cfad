//! Drawing-surface abstraction.
//!
//! The core never owns a rendering backend. Objects draw through any type
//! implementing [`DrawSurface`], passed explicitly to every draw call.
//!
//! Backends:
//! - [`RecordingSurface`]: headless, records every call (tests, debugging)
//! - `PixmapSurface` (feature `skia`): rasterizes with tiny-skia

mod recording;

#[cfg(feature = "skia")]
mod pixmap;

pub use recording::{RecordingSurface, SurfaceOp};

#[cfg(feature = "skia")]
pub use pixmap::{PixmapError, PixmapSurface};

/// Path-based drawing backend.
///
/// Path calls (`move_to`, `line_to`, `arc`) accumulate into a current path;
/// `fill` and `stroke` paint and clear it, `stroke_preserve` paints and keeps it.
/// `save` / `restore` scope graphics state and must be balanced.
pub trait DrawSurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Adds a circular arc centered at `(x, y)`. Angles in radians.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64)
        -> Result<(), Self::Error>;

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    fn fill(&mut self) -> Result<(), Self::Error>;

    fn stroke(&mut self) -> Result<(), Self::Error>;

    fn stroke_preserve(&mut self) -> Result<(), Self::Error>;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;
}

/// Runs `f` between `save` and `restore`.
///
/// `restore` is attempted even when `f` fails; the first error is returned.
pub fn scoped<S, F>(surface: &mut S, f: F) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
    F: FnOnce(&mut S) -> Result<(), S::Error>,
{
    surface.save()?;
    let drawn = f(surface);
    let restored = surface.restore();
    drawn.and(restored)
}
