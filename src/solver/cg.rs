//! Conjugate Gradient (unpreconditioned) per Saad §6.1.

use crate::core::traits::{MatVec, Scalar};
use crate::error::Error;
use crate::inner::dot;
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats};
use crate::vector::Vector;

/// Conjugate Gradient for symmetric positive-definite operators.
///
/// Works through the [`MatVec`] capability alone, so the same solver runs
/// over dense storage and matrix-free operators. SPD-ness of the operator is
/// a precondition; it is not verified, and violating it yields meaningless
/// iterates rather than an error. A vanishing curvature `pᵀAp` is detected
/// and reported as [`Error::Breakdown`]; in that case `x` retains the
/// progress made up to the failing iteration.
pub struct CgSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Scalar> CgSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self {
            conv: Convergence { tol, max_iters },
        }
    }
}

impl<M, T> LinearSolver<M, T> for CgSolver<T>
where
    M: MatVec<T> + ?Sized,
    T: Scalar,
{
    fn solve(
        &mut self,
        a: &M,
        b: &Vector<T>,
        x: &mut Vector<T>,
    ) -> Result<SolveStats<T>, Error> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(Error::ShapeMismatch { expected: n, found: a.ncols() });
        }
        if b.len() != n {
            return Err(Error::ShapeMismatch { expected: n, found: b.len() });
        }
        if x.len() != n {
            return Err(Error::ShapeMismatch { expected: n, found: x.len() });
        }

        let mut r = b - &a.matvec(x)?;
        let mut p = r.clone();
        let mut rsq = dot(&r, &r)?;

        let stats = self.conv.check(rsq, 0);
        if stats.converged {
            // Initial guess already satisfies the tolerance; x untouched.
            return Ok(stats);
        }

        for k in 0..self.conv.max_iters {
            // One matvec per iteration, reused for the step size and the
            // residual update.
            let ap = a.matvec(&p)?;
            let denom = dot(&p, &ap)?;
            if denom.is_zero() {
                return Err(Error::Breakdown { iteration: k });
            }
            let alpha = rsq / denom;
            x.axpy(alpha, &p);
            r.axpy(-alpha, &ap);
            let rsq_new = dot(&r, &r)?;
            let stats = self.conv.check(rsq_new, k + 1);
            if stats.converged {
                return Ok(stats);
            }
            // p = r + beta·p
            p.aypx(rsq_new / rsq, &r);
            rsq = rsq_new;
        }

        Ok(self.conv.check(rsq, self.conv.max_iters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;

    #[test]
    fn cg_solves_simple_spd() {
        // SPD system: [[4,1],[1,3]] x = [1,2]
        let a = DenseMatrix::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let b = Vector::from_vec(vec![1.0, 2.0]);
        let mut x = Vector::zeros(2);
        let mut solver = CgSolver::new(1e-10, 20);
        let stats = solver.solve(&a, &b, &mut x).unwrap();
        assert!(stats.converged, "CG did not converge");
        let expected: [f64; 2] = [0.09090909090909091, 0.6363636363636364];
        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert!((xi - ei).abs() < 1e-8, "xi = {xi}, expected = {ei}");
        }
    }

    #[test]
    fn cg_leaves_converged_guess_untouched() {
        let a = DenseMatrix::<f64>::identity(3);
        let b = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let mut x = b.clone();
        let mut solver = CgSolver::new(1e-8, 10);
        let stats = solver.solve(&a, &b, &mut x).unwrap();
        assert!(stats.converged);
        assert_eq!(stats.iterations, 0);
        assert_eq!(x, b);
    }

    #[test]
    fn cg_reports_breakdown_on_zero_operator() {
        let a = DenseMatrix::<f64>::zeros(2, 2);
        let b = Vector::from_vec(vec![1.0, 1.0]);
        let mut x = Vector::zeros(2);
        let mut solver = CgSolver::new(1e-8, 10);
        assert_eq!(
            solver.solve(&a, &b, &mut x).unwrap_err(),
            Error::Breakdown { iteration: 0 }
        );
    }

    #[test]
    fn cg_rejects_mismatched_shapes() {
        let a = DenseMatrix::<f64>::identity(3);
        let b = Vector::zeros(4);
        let mut x = Vector::zeros(3);
        let mut solver = CgSolver::new(1e-8, 10);
        assert_eq!(
            solver.solve(&a, &b, &mut x).unwrap_err(),
            Error::ShapeMismatch { expected: 3, found: 4 }
        );
    }
}
