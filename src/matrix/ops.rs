//! Matrix Operations

use crate::{
    matrix::{Matrix, MatrixError},
    scalar::Scalar,
    vector::Vector,
};
use approx::AbsDiffEq;
use std::{
    fmt,
    ops::{BitOr, Mul},
};

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.mul_mat(other)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Result<Vector<T>, MatrixError>;

    fn mul(self, other: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        self.mul_vec(other)
    }
}

impl<T: Scalar> BitOr<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    /// Horizontal concatenation.
    fn bitor(self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.hconcat(other)
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Row-bracketed listing, `{[a, b], [c, d]}`. Diagnostic output only,
    /// not a stable format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for r in 0..self.rows() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, column) in self.column_iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                if let Some(value) = column.iter().nth(r) {
                    write!(f, "{value}")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

impl<T: Scalar> AbsDiffEq for Matrix<T> {
    type Epsilon = T::Real;

    fn default_epsilon() -> Self::Epsilon {
        T::TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .column_iter()
                .zip(other.column_iter())
                .all(|(lhs, rhs)| lhs.abs_diff_eq(rhs, epsilon))
    }
}
