//! Square matrices and the handful of operations the series engine needs.
//!
//! `SquareMatrix` is a small row-major container; the algebra lives in free
//! functions so every operation reports mismatched operands as an error
//! instead of panicking.
pub mod algebra;
pub mod matrix;

pub use algebra::{add, identity, multiply, scale};
pub use matrix::SquareMatrix;
