//! Scalar abstraction over real and complex element types.

pub mod scalar;

pub use scalar::{RealScalar, Scalar};
