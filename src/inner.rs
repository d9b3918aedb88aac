//! Inner products: the standard dot product and the A-inner product.

use crate::core::traits::{MatVec, Scalar};
use crate::error::Error;
use crate::vector::Vector;

/// Standard inner product `Σ l(i) · r(i)`.
pub fn dot<T: Scalar>(l: &Vector<T>, r: &Vector<T>) -> Result<T, Error> {
    if l.len() != r.len() {
        return Err(Error::ShapeMismatch {
            expected: l.len(),
            found: r.len(),
        });
    }
    Ok(l.iter()
        .zip(r.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// A-inner product `⟨l, r⟩_A = l · (A r)`.
///
/// Only a genuine inner product when `a` is symmetric positive definite;
/// that is a precondition, not verified here.
pub fn adot<T, M>(a: &M, l: &Vector<T>, r: &Vector<T>) -> Result<T, Error>
where
    T: Scalar,
    M: MatVec<T> + ?Sized,
{
    dot(l, &a.matvec(r)?)
}
