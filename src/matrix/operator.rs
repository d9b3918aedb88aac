//! Matrix-free operators: matrices defined by a closed-form `matvec` with no
//! materialized storage.

use crate::core::traits::{MatShape, MatVec, Scalar};
use crate::error::Error;
use crate::vector::Vector;

/// The `n × n` negative discrete 1-D Laplacian applied as the stencil
/// `[-1, 2, -1]`, without storing the matrix.
///
/// Produces exactly the same products as
/// [`DenseMatrix::laplace_1d`](crate::matrix::DenseMatrix::laplace_1d) at
/// O(n) cost per `matvec`.
#[derive(Clone, Copy, Debug)]
pub struct Laplace1d {
    n: usize,
}

impl Laplace1d {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl MatShape for Laplace1d {
    fn nrows(&self) -> usize {
        self.n
    }

    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T: Scalar> MatVec<T> for Laplace1d {
    fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, Error> {
        if x.len() != self.n {
            return Err(Error::ShapeMismatch {
                expected: self.n,
                found: x.len(),
            });
        }
        let two = T::one() + T::one();
        Ok(Vector::from_fn(self.n, |i| {
            let mut yi = two * x[i];
            if i > 0 {
                yi -= x[i - 1];
            }
            if i + 1 < self.n {
                yi -= x[i + 1];
            }
            yi
        }))
    }
}
