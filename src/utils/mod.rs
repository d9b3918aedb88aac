//! Support utilities for solvers.

pub mod convergence;
pub use convergence::{Convergence, SolveStats};
