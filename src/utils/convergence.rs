//! Convergence tracking & tolerance checks for iterative solvers.

use crate::core::traits::Scalar;

/// Stopping criteria.
///
/// Convergence is declared when the squared residual norm drops below
/// `tol²`. Comparing squares avoids a square root per iteration and keeps
/// the check exact for exact scalars such as rationals.
#[derive(Clone, Copy, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

/// Outcome of a solve.
#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    /// Iterations performed; 0 when the initial guess already satisfied the
    /// tolerance.
    pub iterations: usize,
    /// Squared residual norm at exit.
    pub residual_sq: T,
    /// Whether the tolerance was met within `max_iters` iterations.
    pub converged: bool,
}

impl<T: Scalar> Convergence<T> {
    /// Stats for squared residual `rsq` after `iterations` iterations.
    pub fn check(&self, rsq: T, iterations: usize) -> SolveStats<T> {
        SolveStats {
            iterations,
            residual_sq: rsq,
            converged: rsq < self.tol * self.tol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_against_squared_tolerance() {
        let conv = Convergence { tol: 1e-4, max_iters: 10 };
        assert!(conv.check(9e-9, 3).converged);
        assert!(!conv.check(2e-8, 3).converged);
    }

    #[test]
    fn exact_zero_residual_converges() {
        let conv = Convergence { tol: 1i64, max_iters: 10 };
        let stats = conv.check(0, 0);
        assert!(stats.converged);
        assert_eq!(stats.iterations, 0);
    }
}
