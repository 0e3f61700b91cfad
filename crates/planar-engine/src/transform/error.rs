use std::fmt;

/// Errors raised by [`MatrixTransform`](super::MatrixTransform) stack operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransformError {
    /// `pop` was called without a matching `push`.
    EmptyStack,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::EmptyStack => write!(f, "transform stack is empty; pop without push"),
        }
    }
}

impl std::error::Error for TransformError {}
