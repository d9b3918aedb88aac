//! Row-major dense matrix storage.

use crate::core::traits::{MatShape, MatVec, Scalar};
use crate::error::Error;
use crate::vector::Vector;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense matrix owning a contiguous row-major buffer of exactly
/// `nrows · ncols` elements; `(i, j)` lives at offset `i · ncols + j`.
#[derive(Debug, PartialEq)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Clone> Clone for DenseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.nrows = source.nrows;
        self.ncols = source.ncols;
        // Reuses the buffer when the element counts match.
        self.data.clone_from(&source.data);
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// An `nrows × ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![T::zero(); nrows * ncols],
        }
    }

    /// Builds an `nrows × ncols` matrix from `f(i, j)`.
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Builds a matrix from row slices, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, Error> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(Error::ShapeMismatch {
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// The `n × n` negative discrete 1-D Laplacian: 2 on the diagonal, −1 on
    /// each off-diagonal neighbor. Symmetric positive definite for n ≥ 1.
    pub fn laplace_1d(n: usize) -> Self {
        let two = T::one() + T::one();
        Self::from_fn(n, n, |i, j| {
            if i == j {
                two
            } else if i.abs_diff(j) == 1 {
                -T::one()
            } else {
                T::zero()
            }
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Checked element access.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.nrows && j < self.ncols {
            Some(&self.data[i * self.ncols + j])
        } else {
            None
        }
    }

    /// Unchecked element access.
    ///
    /// # Safety
    ///
    /// `i < self.nrows()` and `j < self.ncols()` must hold.
    pub unsafe fn get_unchecked(&self, i: usize, j: usize) -> &T {
        unsafe { self.data.get_unchecked(i * self.ncols + j) }
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &mut self.data[i * self.ncols + j]
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatVec<T> for DenseMatrix<T> {
    fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>, Error> {
        if x.len() != self.ncols {
            return Err(Error::ShapeMismatch {
                expected: self.ncols,
                found: x.len(),
            });
        }
        let mut y = Vector::zeros(self.nrows);
        if self.ncols == 0 {
            return Ok(y);
        }
        for (row, yi) in self.data.chunks_exact(self.ncols).zip(y.iter_mut()) {
            *yi = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Ok(y)
    }
}

impl<T: Scalar> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.nrows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.ncols + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
