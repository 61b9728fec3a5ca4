//! Vector.

use crate::{errors::DivByZero, matrix::Matrix, scalar::Scalar};
use num_traits::{Float, Zero};
use thiserror::Error;

/// Vector Expression.
///
/// A fixed-length ordered sequence of scalars. The length never changes after
/// construction; [`Vector::reshape`] produces a new [`Matrix`] rather than
/// resizing in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T: Scalar> {
    /// Elements, in order.
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// New vector from its elements.
    pub fn new(data: Vec<T>) -> Vector<T> {
        Vector { data }
    }

    /// Zero vector of the given length.
    pub fn zeros(len: usize) -> Vector<T> {
        Vector { data: vec![T::zero(); len] }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the entry `v[index]`.
    pub fn entry(&self, index: usize) -> Result<&T, VectorError> {
        self.data.get(index).ok_or(VectorError::IndexNotFound)
    }

    /// Get the entry `v[index]`.
    pub fn entry_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        self.data.get_mut(index).ok_or(VectorError::IndexNotFound)
    }

    /// Iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Swap the entries at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), VectorError> {
        if a >= self.data.len() || b >= self.data.len() {
            return Err(VectorError::IndexNotFound);
        }
        self.data.swap(a, b);
        Ok(())
    }

    /// Elementwise addition, in place.
    pub fn add(&mut self, other: &Vector<T>) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::SizeMismatch(self.len(), other.len()));
        }
        for (lhs, rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *lhs = *lhs + *rhs;
        }
        Ok(())
    }

    /// Elementwise subtraction, in place.
    pub fn sub(&mut self, other: &Vector<T>) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::SizeMismatch(self.len(), other.len()));
        }
        for (lhs, rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *lhs = *lhs - *rhs;
        }
        Ok(())
    }

    /// Elementwise scaling by a scalar, in place.
    pub fn scale(&mut self, scalar: T) {
        for value in self.data.iter_mut() {
            *value = *value * scalar;
        }
    }

    /// Elementwise division by a scalar, in place.
    pub fn divide(&mut self, scalar: T) -> Result<(), VectorError> {
        if scalar.is_zero() {
            return Err(DivByZero.into());
        }
        for value in self.data.iter_mut() {
            *value = *value / scalar;
        }
        Ok(())
    }

    /// Inner product.
    ///
    /// The left operand is conjugated, making this the Hermitian inner
    /// product on complex vectors. Accumulates with fused multiply-add.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::SizeMismatch(self.len(), other.len()));
        }
        let mut acc = T::zero();
        for (lhs, rhs) in self.data.iter().zip(other.data.iter()) {
            acc = lhs.conjugate().mul_add(*rhs, acc);
        }
        Ok(acc)
    }

    /// Taxicab norm, the sum of entry magnitudes.
    pub fn norm_1(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for value in self.data.iter() {
            acc = acc + value.magnitude();
        }
        acc
    }

    /// Euclidean norm.
    ///
    /// Squared magnitudes are accumulated with fused multiply-add, so complex
    /// entries contribute through their modulus.
    pub fn norm(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for value in self.data.iter() {
            let magnitude = value.magnitude();
            acc = magnitude.mul_add(magnitude, acc);
        }
        acc.sqrt()
    }

    /// Supremum norm, the largest entry magnitude.
    pub fn norm_inf(&self) -> T::Real {
        let mut acc = T::Real::zero();
        for value in self.data.iter() {
            acc = acc.max(value.magnitude());
        }
        acc
    }

    /// Reshape into a `rows` x `cols` matrix, filling row by row.
    pub fn reshape(&self, rows: usize, cols: usize) -> Result<Matrix<T>, VectorError> {
        let n = rows.checked_mul(cols).ok_or(VectorError::Arithmetic)?;
        if n != self.len() {
            return Err(VectorError::Reshape(self.len(), rows, cols));
        }
        let mut columns = Vec::with_capacity(cols);
        for c in 0..cols {
            let mut column = Vec::with_capacity(rows);
            for r in 0..rows {
                let index = r.checked_mul(cols).and_then(|i| i.checked_add(c)).ok_or(VectorError::Arithmetic)?;
                column.push(*self.entry(index)?);
            }
            columns.push(Vector::new(column));
        }
        Ok(Matrix::from_columns_unchecked(columns))
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Vector<T> {
        Vector::new(data)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Vector<T> {
        Vector::new(data.to_vec())
    }
}

/// Vector Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum VectorError {
    /// Size mismatch between operands.
    #[error("size mismatch, left has {0} elements and right has {1}")]
    SizeMismatch(usize, usize),

    /// Index not found.
    #[error("index not found")]
    IndexNotFound,

    /// Integer overflow or underflow.
    #[error("integer overflow/underflow")]
    Arithmetic,

    /// Reshape dimensions do not multiply out to the vector length.
    #[error("cannot reshape {0} elements into a {1}x{2} matrix")]
    Reshape(usize, usize, usize),

    /// Operation error.
    #[error("operation error: {0}")]
    OperationError(#[from] DivByZero),
}
