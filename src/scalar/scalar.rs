//! Definitions for scalars.

use num_complex::Complex;
use num_traits::{Float, One, Zero};
use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A numeric element the containers and the reduction engine operate on.
///
/// Implemented for real floating point numbers and for complex numbers built
/// from them. Algorithms that need pivot selection or tolerance comparisons
/// depend on [`Scalar::magnitude`] rather than on an ordering of the scalars
/// themselves, which keeps them valid for complex input.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + 'static
{
    /// The real type magnitudes are measured in.
    type Real: Float + Debug + Display;

    /// Absolute tolerance used by approximate container equality.
    const TOLERANCE: Self::Real;

    /// Absolute value for reals, modulus for complex numbers.
    fn magnitude(self) -> Self::Real;

    /// Complex conjugate, the identity on reals.
    fn conjugate(self) -> Self;

    /// `self * b + c`, fused into a single rounding step where the type
    /// supports it.
    fn mul_add(self, b: Self, c: Self) -> Self;

    /// Lift a real magnitude back into this scalar type.
    fn from_real(value: Self::Real) -> Self;
}

/// A scalar with a total order on the real line.
///
/// Complex numbers are unordered, so operations that compare raw values
/// rather than magnitudes bound on this trait.
pub trait RealScalar: Scalar<Real = Self> + PartialOrd {}

macro_rules! impl_real_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            type Real = $ty;

            const TOLERANCE: Self::Real = 1e-5;

            fn magnitude(self) -> Self::Real {
                self.abs()
            }

            fn conjugate(self) -> Self {
                self
            }

            fn mul_add(self, b: Self, c: Self) -> Self {
                <$ty>::mul_add(self, b, c)
            }

            fn from_real(value: Self::Real) -> Self {
                value
            }
        }

        impl RealScalar for $ty {}
    };
}

impl_real_scalar!(f32);
impl_real_scalar!(f64);

macro_rules! impl_complex_scalar {
    ($ty:ty) => {
        impl Scalar for Complex<$ty> {
            type Real = $ty;

            const TOLERANCE: Self::Real = 1e-5;

            fn magnitude(self) -> Self::Real {
                self.re.hypot(self.im)
            }

            fn conjugate(self) -> Self {
                self.conj()
            }

            // Complex products have no fused hardware form.
            fn mul_add(self, b: Self, c: Self) -> Self {
                self * b + c
            }

            fn from_real(value: Self::Real) -> Self {
                Complex::new(value, 0.0)
            }
        }
    };
}

impl_complex_scalar!(f32);
impl_complex_scalar!(f64);
