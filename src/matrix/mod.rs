//! Matrix container, its operations, and the reduction engine.

pub mod matrix;
pub mod ops;
pub mod reduction;

pub use matrix::{Matrix, MatrixError};
#[allow(unused_imports)]
pub use ops::*;
