//! Vector container and its operations.

pub mod ops;
pub mod vector;

pub use vector::{Vector, VectorError};
