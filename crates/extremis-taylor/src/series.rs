//! Truncated power series of the matrix exponential.

use std::f64::consts::PI;

use crate::error::MatrixError;
use crate::math::{add, identity, multiply, scale, SquareMatrix};

pub const DEFAULT_SIZE: usize = 2;
pub const DEFAULT_ORDER: u32 = 2;

/// `Σ_{k=0}^{order} base^k / k!`
///
/// Each power is obtained from the previous one by a single multiplication and
/// the factorial is carried alongside it as an `f64`. If the factorial or a
/// power leaves the finite `f64` range the evaluation stops with
/// [`MatrixError::NumericOverflow`]; the factorial alone overflows past order
/// 170.
pub fn compute(base: &SquareMatrix<f64>, order: u32) -> Result<SquareMatrix<f64>, MatrixError> {
    let size = base.size();
    let mut sum = identity::<f64>(size);
    let mut power = identity::<f64>(size);
    let mut factorial = 1.0f64;
    let base_finite = is_finite(base);

    for k in 1..=order {
        power = multiply(&power, base)?;
        factorial *= k as f64;
        if !factorial.is_finite() || (base_finite && !is_finite(&power)) {
            return Err(MatrixError::NumericOverflow { order: k });
        }
        sum = add(&sum, &scale(&power, 1.0 / factorial))?;
    }
    Ok(sum)
}

fn is_finite(m: &SquareMatrix<f64>) -> bool {
    m.as_slice().iter().all(|v| v.is_finite())
}

/// Generator of a plane rotation by `angle` in the first two coordinates:
/// `angle` at `(0, 1)`, `-angle` at `(1, 0)`, zeros elsewhere.
pub fn rotation_generator(size: usize, angle: f64) -> SquareMatrix<f64> {
    let mut m = SquareMatrix::zeros(size);
    if size >= 2 {
        m[(0, 1)] = angle;
        m[(1, 0)] = -angle;
    }
    m
}

/// A base matrix, a truncation order and the approximation they produce.
///
/// The approximation is only ever replaced by a fully computed value: a failed
/// recomputation leaves base, order and approximation as they were.
#[derive(Clone, Debug, PartialEq)]
pub struct TaylorSeries {
    matrix: SquareMatrix<f64>,
    order: u32,
    approximation: SquareMatrix<f64>,
}

impl TaylorSeries {
    /// Fails with [`MatrixError::InvalidShape`] for a 0x0 base.
    pub fn new(matrix: SquareMatrix<f64>, order: u32) -> Result<Self, MatrixError> {
        require_non_empty(&matrix)?;
        let approximation = compute(&matrix, order)?;
        Ok(Self {
            matrix,
            order,
            approximation,
        })
    }

    /// Zero base and zero approximation of the given size at the default
    /// order. No series is evaluated until the order or matrix is set.
    pub fn with_size(size: usize) -> Self {
        let size = clamp_size(size);
        Self {
            matrix: SquareMatrix::zeros(size),
            order: DEFAULT_ORDER,
            approximation: SquareMatrix::zeros(size),
        }
    }

    pub fn matrix(&self) -> &SquareMatrix<f64> {
        &self.matrix
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn approximation(&self) -> &SquareMatrix<f64> {
        &self.approximation
    }

    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Re-seed base and approximation as zero matrices of `size` (at least 1).
    pub fn set_size(&mut self, size: usize) {
        let size = clamp_size(size);
        self.matrix = SquareMatrix::zeros(size);
        self.approximation = SquareMatrix::zeros(size);
    }

    pub fn set_order(&mut self, order: u32) -> Result<&SquareMatrix<f64>, MatrixError> {
        let approximation = compute(&self.matrix, order)?;
        self.order = order;
        self.approximation = approximation;
        Ok(&self.approximation)
    }

    pub fn set_matrix(
        &mut self,
        matrix: SquareMatrix<f64>,
    ) -> Result<&SquareMatrix<f64>, MatrixError> {
        require_non_empty(&matrix)?;
        let approximation = compute(&matrix, self.order)?;
        self.matrix = matrix;
        self.approximation = approximation;
        Ok(&self.approximation)
    }

    /// Edit one cell of the base matrix. The approximation is left as is until
    /// [`recompute`](Self::recompute) or another setter runs.
    pub fn set_cell(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.matrix.set(row, col, value)
    }

    pub fn recompute(&mut self) -> Result<&SquareMatrix<f64>, MatrixError> {
        self.set_order(self.order)
    }
}

impl Default for TaylorSeries {
    /// `exp` of the rotation generator by π, truncated at the default order.
    fn default() -> Self {
        let matrix = rotation_generator(DEFAULT_SIZE, PI);
        let approximation = match compute(&matrix, DEFAULT_ORDER) {
            Ok(m) => m,
            Err(_) => unreachable!("order 2 of a finite 2x2 matrix cannot overflow"),
        };
        Self {
            matrix,
            order: DEFAULT_ORDER,
            approximation,
        }
    }
}

fn require_non_empty(matrix: &SquareMatrix<f64>) -> Result<(), MatrixError> {
    if matrix.size() == 0 {
        return Err(MatrixError::InvalidShape { size: 0, len: 0 });
    }
    Ok(())
}

pub(crate) fn clamp_size(size: usize) -> usize {
    if size == 0 {
        log::warn!("[Extremis::Taylor] Matrix size 0 requested; using 1");
        1
    } else {
        size
    }
}
