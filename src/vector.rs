//! Owned fixed-length dense vectors over a generic [`Scalar`].

use crate::core::traits::Scalar;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub, SubAssign};

/// A dense vector owning its storage.
///
/// Distinct vectors never alias: cloning deep-copies, and `clone_from`
/// reuses the existing buffer when lengths already match.
#[derive(Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Vec::clone_from keeps the allocation when capacity suffices.
        self.data.clone_from(&source.data);
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Scalar> Vector<T> {
    /// A vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Takes ownership of `data` without copying.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Builds a vector of `len` elements from `f(i)`.
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            data: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Checked element access.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    /// Unchecked element access.
    ///
    /// # Safety
    ///
    /// `i` must be less than `self.len()`.
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        unsafe { self.data.get_unchecked(i) }
    }

    /// Unchecked mutable element access.
    ///
    /// # Safety
    ///
    /// `i` must be less than `self.len()`.
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(i) }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// `self += alpha · v`.
    #[track_caller]
    pub fn axpy(&mut self, alpha: T, v: &Vector<T>) {
        check_len(self.len(), v.len());
        for (y, &x) in self.data.iter_mut().zip(v.iter()) {
            *y += alpha * x;
        }
    }

    /// `self = v + beta · self`.
    #[track_caller]
    pub fn aypx(&mut self, beta: T, v: &Vector<T>) {
        check_len(self.len(), v.len());
        for (y, &x) in self.data.iter_mut().zip(v.iter()) {
            *y = x + beta * *y;
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

#[track_caller]
fn check_len(l: usize, r: usize) {
    assert_eq!(l, r, "vector length mismatch: {l} vs {r}");
}

impl<T: Scalar> Add for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn add(self, rhs: Self) -> Vector<T> {
        check_len(self.len(), rhs.len());
        self.iter().zip(rhs.iter()).map(|(&l, &r)| l + r).collect()
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    #[track_caller]
    fn sub(self, rhs: Self) -> Vector<T> {
        check_len(self.len(), rhs.len());
        self.iter().zip(rhs.iter()).map(|(&l, &r)| l - r).collect()
    }
}

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector<T>) {
        check_len(self.len(), rhs.len());
        for (l, &r) in self.data.iter_mut().zip(rhs.iter()) {
            *l += r;
        }
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        check_len(self.len(), rhs.len());
        for (l, &r) in self.data.iter_mut().zip(rhs.iter()) {
            *l -= r;
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.iter().map(|&v| v * rhs).collect()
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, rhs: T) -> Vector<T> {
        for v in self.data.iter_mut() {
            *v *= rhs;
        }
        self
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
