use std::fmt;

/// Construction-time validation failure for geometry and view regions.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices.
    TooFewVertices { found: usize },
    /// A coordinate was NaN or infinite.
    NonFinite,
    /// A window or viewport with non-positive or non-finite extent.
    InvalidExtent { width: f64, height: f64 },
    /// A zoom factor that is not strictly positive and finite.
    InvalidZoom(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewVertices { found } => {
                write!(f, "polygon needs at least 3 vertices, got {}", found)
            }
            GeometryError::NonFinite => write!(f, "coordinate is not finite"),
            GeometryError::InvalidExtent { width, height } => {
                write!(f, "invalid extent {}x{}; width and height must be positive", width, height)
            }
            GeometryError::InvalidZoom(factor) => {
                write!(f, "invalid zoom factor {}; must be positive", factor)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
