use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::MatrixError;
use crate::math::SquareMatrix;
use crate::series::{clamp_size, rotation_generator, TaylorSeries, DEFAULT_ORDER, DEFAULT_SIZE};

/// Input for a series evaluation.
///
/// Without an explicit `matrix` the base is the rotation generator by π of
/// the requested `size` (0 is raised to 1). An explicit empty `matrix` is
/// rejected.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeriesConfig {
    pub size: usize,
    pub order: u32,
    pub matrix: Option<Vec<Vec<f64>>>,
}

impl SeriesConfig {
    pub fn new(order: u32, matrix: Vec<Vec<f64>>) -> Self {
        Self {
            size: matrix.len(),
            order,
            matrix: Some(matrix),
        }
    }

    pub fn base_matrix(&self) -> Result<SquareMatrix<f64>, MatrixError> {
        match &self.matrix {
            Some(rows) if rows.is_empty() => Err(MatrixError::InvalidShape { size: 0, len: 0 }),
            Some(rows) => SquareMatrix::from_rows(rows.clone()),
            None => Ok(rotation_generator(clamp_size(self.size), PI)),
        }
    }

    pub fn build(&self) -> Result<TaylorSeries, MatrixError> {
        TaylorSeries::new(self.base_matrix()?, self.order)
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            order: DEFAULT_ORDER,
            matrix: None,
        }
    }
}
