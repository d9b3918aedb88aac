//! Core traits: the scalar capability and the matrix capability.

pub mod traits;
pub use traits::{MatShape, MatVec, Scalar};
