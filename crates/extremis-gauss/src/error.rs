use std::error::Error;
use std::fmt;

/// Failures raised by the factorizer, the prime cache and the lattice builder.
#[derive(Debug, Clone, PartialEq)]
pub enum GaussError {
    InvalidArgument(String),
    OutOfRange { index: i128, size: usize },
    InvalidScale(f64),
}

impl fmt::Display for GaussError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GaussError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GaussError::OutOfRange { index, size } => write!(
                f,
                "Index {} is outside the prime cache range [0, {})",
                index, size
            ),
            GaussError::InvalidScale(scale) => {
                write!(f, "Lattice scale must be a positive finite number, got {}", scale)
            }
        }
    }
}

impl Error for GaussError {}
