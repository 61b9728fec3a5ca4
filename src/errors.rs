//! Crate errors.

use thiserror::Error;

/// Division by zero.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;

/// Zero-norm vector where a direction is required.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("vector has zero norm")]
pub struct ZeroNorm;
