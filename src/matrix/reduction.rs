//! Matrix reduction engine: row echelon form, determinant, inverse, rank.
//!
//! Every operation works on a private copy of the receiver. Pivot searches
//! test entries against zero exactly, with no tolerance; on near-singular
//! input an arbitrarily small entry can therefore be selected as a pivot.

use crate::{
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
};
use num_traits::{One, Zero};

impl<T: Scalar> Matrix<T> {
    /// Reduced row-echelon form of the matrix.
    ///
    /// The forward pass walks a leading-column index: the first row at or
    /// below the current one with a nonzero entry in that column is swapped
    /// into position, normalized, and used to eliminate the entries below it.
    /// A column with no nonzero entry in the remaining rows advances the
    /// leading-column index without consuming a row. The backward pass then
    /// eliminates the entries above every pivot. Empty and all-zero matrices
    /// come back unchanged.
    pub fn row_echelon(&self) -> Result<Matrix<T>, MatrixError> {
        let (rows, cols) = self.shape();
        let mut result = self.clone();

        let mut lead = 0;
        'forward: for r in 0..rows {
            if lead >= cols {
                break;
            }

            // Find the pivot row for the current leading column.
            let mut i = r;
            while result.entry(i, lead)?.is_zero() {
                i += 1;
                if i == rows {
                    i = r;
                    lead += 1;
                    if lead == cols {
                        break 'forward;
                    }
                }
            }
            if i != r {
                result.swap_rows(r, i)?;
            }

            // Normalize the pivot row.
            let pivot = *result.entry(r, lead)?;
            for c in 0..cols {
                let value = result.entry_mut(r, c)?;
                *value = *value / pivot;
            }

            // Eliminate the rows below the pivot.
            for j in r + 1..rows {
                let factor = *result.entry(j, lead)?;
                if factor.is_zero() {
                    continue;
                }
                for c in 0..cols {
                    let base = *result.entry(r, c)?;
                    let value = result.entry_mut(j, c)?;
                    *value = *value - factor * base;
                }
            }

            lead += 1;
        }

        // Eliminate above each pivot.
        for r in (0..rows).rev() {
            let Some(pivot_col) = result.pivot_column(r)? else {
                continue;
            };
            for i in (0..r).rev() {
                let factor = *result.entry(i, pivot_col)?;
                if factor.is_zero() {
                    continue;
                }
                for c in 0..cols {
                    let base = *result.entry(r, c)?;
                    let value = result.entry_mut(i, c)?;
                    *value = *value - factor * base;
                }
            }
        }

        Ok(result)
    }

    /// Determinant of a square matrix.
    ///
    /// Orders 1 and 2 are computed directly. Larger orders run Gaussian
    /// elimination on a copy: an exactly-zero diagonal entry triggers a
    /// downward search for a row to swap in, the sign tracking the swap
    /// parity, and the result is the signed product of the diagonal. A column
    /// with no nonzero entry at or below the diagonal makes the determinant
    /// zero outright.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.rows(), self.cols()));
        }
        let n = self.rows();
        if n == 0 {
            return Ok(T::one());
        }
        if n == 1 {
            return Ok(*self.entry(0, 0)?);
        }
        if n == 2 {
            let a = *self.entry(0, 0)?;
            let b = *self.entry(0, 1)?;
            let c = *self.entry(1, 0)?;
            let d = *self.entry(1, 1)?;
            return Ok(a * d - c * b);
        }

        let mut tmp = self.clone();
        let mut swaps = 0u32;
        for i in 0..n {
            if tmp.entry(i, i)?.is_zero() {
                let mut swapped = false;
                for j in i + 1..n {
                    if !tmp.entry(j, i)?.is_zero() {
                        tmp.swap_rows(i, j)?;
                        swaps += 1;
                        swapped = true;
                        break;
                    }
                }
                // The column is zero from the diagonal down.
                if !swapped {
                    return Ok(T::zero());
                }
            }

            // Eliminate below the diagonal.
            let pivot = *tmp.entry(i, i)?;
            for j in i + 1..n {
                let factor = *tmp.entry(j, i)? / pivot;
                if factor.is_zero() {
                    continue;
                }
                for k in i..n {
                    let base = *tmp.entry(i, k)?;
                    let value = tmp.entry_mut(j, k)?;
                    *value = (-factor).mul_add(base, *value);
                }
            }
        }

        let mut det = if swaps % 2 == 0 { T::one() } else { -T::one() };
        for i in 0..n {
            det = det * *tmp.entry(i, i)?;
        }
        Ok(det)
    }

    /// Inverse of a square matrix.
    ///
    /// Runs Gauss-Jordan elimination over the augmented matrix `[A | I]`,
    /// picking each pivot as the remaining row with the largest magnitude in
    /// the current column, so real and complex scalars behave uniformly. The
    /// determinant is checked up front; a pivot that still comes out exactly
    /// zero mid-elimination also reports the matrix as singular.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.rows(), self.cols()));
        }
        if self.determinant()?.is_zero() {
            return Err(MatrixError::Singular);
        }
        let n = self.rows();
        let mut augmented = self.hconcat(&Matrix::identity(n)?)?;

        for i in 0..n {
            // Partial pivoting by largest magnitude in the remaining column.
            let mut pivot_row = i;
            let mut best = augmented.entry(i, i)?.magnitude();
            for j in i + 1..n {
                let candidate = augmented.entry(j, i)?.magnitude();
                if candidate > best {
                    best = candidate;
                    pivot_row = j;
                }
            }
            if pivot_row != i {
                augmented.swap_rows(i, pivot_row)?;
            }

            // Normalize the pivot row.
            let pivot = *augmented.entry(i, i)?;
            if pivot.is_zero() {
                return Err(MatrixError::Singular);
            }
            for c in 0..2 * n {
                let value = augmented.entry_mut(i, c)?;
                *value = *value / pivot;
            }

            // Eliminate every other row in the same pass.
            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = *augmented.entry(r, i)?;
                if factor.is_zero() {
                    continue;
                }
                for c in 0..2 * n {
                    let base = *augmented.entry(i, c)?;
                    let value = augmented.entry_mut(r, c)?;
                    *value = *value - factor * base;
                }
            }
        }

        // The right half now holds the inverse.
        let mut columns = Vec::with_capacity(n);
        for c in n..2 * n {
            columns.push(augmented.column(c)?.clone());
        }
        Matrix::from_columns(columns)
    }

    /// Rank, the number of nonzero rows in the row-echelon form.
    pub fn rank(&self) -> Result<usize, MatrixError> {
        let echelon = self.row_echelon()?;
        let mut rank = 0;
        for r in 0..echelon.rows() {
            if echelon.pivot_column(r)?.is_some() {
                rank += 1;
            }
        }
        Ok(rank)
    }

    /// First column of row `row` holding a nonzero entry, if any.
    fn pivot_column(&self, row: usize) -> Result<Option<usize>, MatrixError> {
        for c in 0..self.cols() {
            if !self.entry(row, c)?.is_zero() {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }
}
