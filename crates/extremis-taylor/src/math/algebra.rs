use num_traits::Num;

use crate::error::MatrixError;
use crate::math::matrix::SquareMatrix;

fn check_same_size<T>(left: &SquareMatrix<T>, right: &SquareMatrix<T>) -> Result<(), MatrixError> {
    if left.size() != right.size() {
        return Err(MatrixError::DimensionMismatch {
            left: left.size(),
            right: right.size(),
        });
    }
    Ok(())
}

pub fn identity<T: Copy + Num>(size: usize) -> SquareMatrix<T> {
    SquareMatrix::identity(size)
}

/// Elementwise sum.
pub fn add<T: Copy + Num>(
    left: &SquareMatrix<T>,
    right: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, MatrixError> {
    check_same_size(left, right)?;
    let data = left
        .as_slice()
        .iter()
        .zip(right.as_slice())
        .map(|(&a, &b)| a + b)
        .collect();
    SquareMatrix::from_shape_vec(left.size(), data)
}

/// Matrix product. The right operand is transposed first so each output cell
/// is a dot product of two contiguous rows.
pub fn multiply<T: Copy + Num>(
    left: &SquareMatrix<T>,
    right: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>, MatrixError> {
    check_same_size(left, right)?;
    let size = left.size();
    let right_t = right.transpose();

    let mut data = Vec::with_capacity(size * size);
    for i in 0..size {
        let row = left.row_slice(i);
        for j in 0..size {
            let col = right_t.row_slice(j);
            let acc = row
                .iter()
                .zip(col)
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
            data.push(acc);
        }
    }
    SquareMatrix::from_shape_vec(size, data)
}

/// Multiply every cell by `k`.
pub fn scale<T: Copy + Num>(matrix: &SquareMatrix<T>, k: T) -> SquareMatrix<T> {
    matrix.mapv(|&v| v * k)
}
