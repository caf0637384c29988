use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::MatrixError;

/// Row-major `size x size` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix<T = f64> {
    data: Vec<T>,
    size: usize,
}

impl<T> SquareMatrix<T> {
    pub fn from_shape_vec(size: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != size * size {
            return Err(MatrixError::InvalidShape {
                size,
                len: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Build from a list of rows; every row must be as long as the list.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(MatrixError::InvalidShape {
                    size,
                    len: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.size]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Overwrite one cell, leaving every other cell untouched.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.size || col >= self.size {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    pub fn mapv<U, F>(&self, mut f: F) -> SquareMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        SquareMatrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            size: self.size,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.size).map(|r| self.row_slice(r).to_vec()).collect()
    }

    pub fn transpose(&self) -> SquareMatrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.size {
            for row in 0..self.size {
                data.push(self[(row, col)].clone());
            }
        }
        SquareMatrix {
            data,
            size: self.size,
        }
    }
}

impl<T> SquareMatrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(size: usize) -> Self {
        SquareMatrix {
            data: vec![T::zero(); size * size],
            size,
        }
    }
}

impl<T> SquareMatrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(size: usize) -> Self {
        let mut m = SquareMatrix::zeros(size);
        for i in 0..size {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.size {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
