//! Solver interfaces.

use crate::core::traits::Scalar;
use crate::error::Error;
use crate::utils::convergence::SolveStats;
use crate::vector::Vector;

/// Common interface for solvers of `A·x = b`.
pub trait LinearSolver<M: ?Sized, T: Scalar> {
    /// Solve `A·x = b`, writing the result into `x`.
    ///
    /// `x` doubles as the initial guess. Running out of iterations is
    /// reported through [`SolveStats::converged`], not as an error.
    fn solve(&mut self, a: &M, b: &Vector<T>, x: &mut Vector<T>)
        -> Result<SolveStats<T>, Error>;
}

pub mod cg;
pub use cg::CgSolver;
