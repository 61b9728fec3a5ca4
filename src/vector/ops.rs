//! Vector Operations

use crate::{scalar::Scalar, vector::Vector};
use approx::AbsDiffEq;
use std::fmt;

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> AbsDiffEq for Vector<T> {
    type Epsilon = T::Real;

    fn default_epsilon() -> Self::Epsilon {
        T::TOLERANCE
    }

    /// Elementwise comparison of entry magnitudes, valid for complex entries.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(lhs, rhs)| (*lhs - *rhs).magnitude() <= epsilon)
    }
}
