//! Matrix.

use crate::{
    scalar::Scalar,
    vector::{Vector, VectorError},
};
use num_traits::{One, Zero};
use thiserror::Error;

/// Matrix Expression, stored as a sequence of equal-length columns.
///
/// `rows()` and `cols()` are derived from the storage rather than tracked
/// separately; an empty matrix (zero columns) is valid and has `rows() == 0`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T: Scalar> {
    /// Columns, all sharing one length.
    columns: Vec<Vector<T>>,
}

impl<T: Scalar> Matrix<T> {
    /// New matrix from a nested row specification.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let Some(first) = rows.first() else {
            return Ok(Matrix { columns: Vec::new() });
        };
        let ncols = first.len();
        let mut columns = vec![Vec::with_capacity(rows.len()); ncols];
        for row in &rows {
            if row.len() != ncols {
                return Err(MatrixError::Ragged(ncols, row.len()));
            }
            for (column, value) in columns.iter_mut().zip(row.iter()) {
                column.push(*value);
            }
        }
        Ok(Matrix { columns: columns.into_iter().map(Vector::new).collect() })
    }

    /// New matrix from its columns.
    pub fn from_columns(columns: Vec<Vector<T>>) -> Result<Matrix<T>, MatrixError> {
        if let Some(first) = columns.first() {
            for column in &columns {
                if column.len() != first.len() {
                    return Err(MatrixError::Ragged(first.len(), column.len()));
                }
            }
        }
        Ok(Matrix { columns })
    }

    /// New matrix from columns already known to share one length.
    pub(crate) fn from_columns_unchecked(columns: Vec<Vector<T>>) -> Matrix<T> {
        Matrix { columns }
    }

    /// Zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Matrix<T> {
        Matrix { columns: vec![Vector::zeros(rows); cols] }
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Result<Matrix<T>, MatrixError> {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            *m.entry_mut(i, i)? = T::one();
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vector::len)
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let column = self.columns.get(col).ok_or(MatrixError::IndexNotFound)?;
        column.entry(row).map_err(|_| MatrixError::IndexNotFound)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let column = self.columns.get_mut(col).ok_or(MatrixError::IndexNotFound)?;
        column.entry_mut(row).map_err(|_| MatrixError::IndexNotFound)
    }

    /// Get column `col`.
    pub fn column(&self, col: usize) -> Result<&Vector<T>, MatrixError> {
        self.columns.get(col).ok_or(MatrixError::IndexNotFound)
    }

    /// Iterator over the columns.
    pub fn column_iter(&self) -> std::slice::Iter<'_, Vector<T>> {
        self.columns.iter()
    }

    /// Swap rows `a` and `b` across every column.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        for column in self.columns.iter_mut() {
            column.swap(a, b).map_err(|_| MatrixError::IndexNotFound)?;
        }
        Ok(())
    }

    /// Elementwise addition, in place.
    pub fn add(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        for (lhs, rhs) in self.columns.iter_mut().zip(other.columns.iter()) {
            lhs.add(rhs)?;
        }
        Ok(())
    }

    /// Elementwise subtraction, in place.
    pub fn sub(&mut self, other: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        for (lhs, rhs) in self.columns.iter_mut().zip(other.columns.iter()) {
            lhs.sub(rhs)?;
        }
        Ok(())
    }

    /// Elementwise scaling by a scalar, in place.
    pub fn scale(&mut self, scalar: T) {
        for column in self.columns.iter_mut() {
            column.scale(scalar);
        }
    }

    /// Matrix-vector product, accumulated with fused multiply-add.
    pub fn mul_vec(&self, other: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        if self.cols() != other.len() {
            return Err(MatrixError::ShapeMismatch(self.shape(), (other.len(), 1)));
        }
        let mut result = Vector::zeros(self.rows());
        for (column, x) in self.columns.iter().zip(other.iter()) {
            for (acc, a) in result.iter_mut().zip(column.iter()) {
                *acc = a.mul_add(*x, *acc);
            }
        }
        Ok(result)
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    pub fn mul_mat(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        let mut columns = Vec::with_capacity(other.cols());
        for column in other.columns.iter() {
            columns.push(self.mul_vec(column)?);
        }
        Ok(Matrix { columns })
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.rows(), self.cols()));
        }
        let mut result = T::zero();
        for i in 0..self.cols() {
            result = result + *self.entry(i, i)?;
        }
        Ok(result)
    }

    /// Transposed copy, axes swapped.
    pub fn transpose(&self) -> Matrix<T> {
        let mut columns = vec![Vec::with_capacity(self.cols()); self.rows()];
        for column in self.columns.iter() {
            for (bucket, value) in columns.iter_mut().zip(column.iter()) {
                bucket.push(*value);
            }
        }
        Matrix { columns: columns.into_iter().map(Vector::new).collect() }
    }

    /// Horizontal concatenation `[self | other]`.
    pub fn hconcat(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.rows() != other.rows() {
            return Err(MatrixError::ShapeMismatch(self.shape(), other.shape()));
        }
        let mut columns = Vec::with_capacity(self.cols() + other.cols());
        columns.extend(self.columns.iter().cloned());
        columns.extend(other.columns.iter().cloned());
        Ok(Matrix { columns })
    }

    /// Flatten into a vector in column-major traversal order.
    pub fn flatten(&self) -> Vector<T> {
        let mut data = Vec::with_capacity(self.rows().saturating_mul(self.cols()));
        for column in self.columns.iter() {
            data.extend(column.iter().copied());
        }
        Vector::new(data)
    }
}

/// Matrix Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible.
    #[error("shape mismatch, left is {0:?} and right is {1:?}")]
    ShapeMismatch((usize, usize), (usize, usize)),

    /// A square matrix is required.
    #[error("operation requires a square matrix, found {0}x{1}")]
    NotSquare(usize, usize),

    /// Non-invertible, singular matrix.
    #[error("singular matrix can't be inverted")]
    Singular,

    /// Ragged construction input.
    #[error("ragged input, expected length {0} but found {1}")]
    Ragged(usize, usize),

    /// Index not found.
    #[error("index not found")]
    IndexNotFound,

    /// Vector error.
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),
}
