//! cgsolve: generic dense linear algebra and a Conjugate Gradient solver.
//!
//! This crate provides an owned dense [`Vector`], an abstract [`MatVec`]
//! operator capability with a row-major [`DenseMatrix`] implementation and a
//! matrix-free [`Laplace1d`] operator, standard and A-inner products, and an
//! iterative [`CgSolver`] for symmetric positive-definite systems. All of it
//! is generic over a [`Scalar`] bound satisfied by floats, signed integers,
//! and exact rationals alike.

pub mod core;
pub mod error;
pub mod inner;
pub mod matrix;
pub mod solver;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::core::*;
pub use error::*;
pub use inner::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;
pub use vector::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
