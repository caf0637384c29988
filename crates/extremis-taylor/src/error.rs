use std::error::Error;
use std::fmt;

/// Failures raised by matrix construction, matrix algebra and series evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    DimensionMismatch { left: usize, right: usize },
    IndexOutOfBounds { row: usize, col: usize, size: usize },
    InvalidShape { size: usize, len: usize },
    NumericOverflow { order: u32 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Matrix dimensions differ: {}x{} and {}x{}",
                left, left, right, right
            ),
            MatrixError::IndexOutOfBounds { row, col, size } => write!(
                f,
                "Cell ({}, {}) is outside a {}x{} matrix",
                row, col, size, size
            ),
            MatrixError::InvalidShape { size, len } => write!(
                f,
                "invalid square shape ({}, {}) for buffer of length {}",
                size, size, len
            ),
            MatrixError::NumericOverflow { order } => write!(
                f,
                "Series term overflowed the f64 range at order {}",
                order
            ),
        }
    }
}

impl Error for MatrixError {}
