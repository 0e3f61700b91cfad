use std::fmt;

/// Clipping failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClipError {
    /// Endpoint substitution did not settle within one pass per region edge.
    NotConverged { substitutions: usize },
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::NotConverged { substitutions } => {
                write!(f, "line clipping did not converge after {} substitutions", substitutions)
            }
        }
    }
}

impl std::error::Error for ClipError {}
