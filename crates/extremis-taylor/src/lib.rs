//! extremis-taylor: truncated matrix exponentials.
//!
//! Provides a row-major `SquareMatrix`, the matrix algebra needed to sum a
//! power series (identity, add, multiply, scale), the fixed-order Taylor
//! approximation of `exp(M)` and a small stateful holder that keeps a base
//! matrix, its order and the current approximation in step.
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod series;

pub use error::MatrixError;
pub use math::SquareMatrix;
pub use series::{compute, TaylorSeries};
