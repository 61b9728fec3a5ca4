//! Dense linear algebra primitives: fixed-shape vectors, column-major matrices,
//! and elimination-based matrix reductions over real and complex scalars.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod errors;
pub mod functions;
pub mod matrix;
pub mod scalar;
pub mod vector;
