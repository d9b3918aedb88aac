//! Core linear-algebra traits for cgsolve.

use crate::error::Error;
use crate::vector::Vector;
use num_traits::{NumAssign, Signed, ToPrimitive};
use std::fmt;

/// Element type of vectors and matrices.
///
/// A scalar is closed under the four arithmetic operations (plus their
/// assigning forms and negation), comparable, and convertible to `f64` for
/// display and diagnostics. Both exact scalars (signed integers, rationals,
/// where `==` is meaningful on results) and approximate scalars (floats,
/// where results must be compared with a tolerance) satisfy this bound;
/// the choice of comparison is the caller's.
pub trait Scalar:
    Copy + PartialOrd + NumAssign + Signed + ToPrimitive + fmt::Debug + fmt::Display
{
    /// Lossy conversion for display purposes.
    fn to_display(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where
    T: Copy + PartialOrd + NumAssign + Signed + ToPrimitive + fmt::Debug + fmt::Display
{
}

/// Shape of a linear operator.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Matrix–vector product y = A·x, the only operation solvers require of a
/// matrix.
///
/// Any representation qualifies — materialized storage like
/// [`DenseMatrix`](crate::matrix::DenseMatrix) or a closed-form operator like
/// [`Laplace1d`](crate::matrix::Laplace1d) — which is what lets the same
/// solver run over implicit operators without modification.
pub trait MatVec<T: Scalar>: MatShape {
    /// Compute `A · x`, allocating a fresh vector of length `nrows()`.
    ///
    /// Fails with [`Error::ShapeMismatch`] before any allocation when
    /// `x.len() != self.ncols()`. Never mutates `x`.
    fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, Error>;
}
