//! Tests for core dense operations: vector arithmetic, matrix-vector
//! multiplication, and inner products, over both exact and approximate
//! scalars.

use approx::assert_abs_diff_eq;
use cgsolve::core::traits::MatVec;
use cgsolve::inner::{adot, dot};
use cgsolve::matrix::DenseMatrix;
use cgsolve::vector::Vector;
use rand::Rng;

/// `[0, step, 2·step, ...]` of length `n`.
fn range(n: usize, step: i64) -> Vector<i64> {
    Vector::from_fn(n, |i| i as i64 * step)
}

#[test]
fn identity_matvec_is_identity() {
    let n = 5;
    let eye = DenseMatrix::<f64>::identity(n);
    let x = Vector::from_fn(n, |i| i as f64);
    let y = eye.matvec(&x).unwrap();
    for (&yi, &xi) in y.iter().zip(x.iter()) {
        assert_abs_diff_eq!(yi, xi, epsilon = 1e-14);
    }
}

#[test]
fn laplacian_matvec_of_squares() {
    // For x(i) = i² − 1 the stencil gives −2 everywhere except the last
    // entry, which is n² − 3.
    let n = 5;
    let a = DenseMatrix::<i64>::laplace_1d(n);
    let x = Vector::from_fn(n, |i| (i * i) as i64 - 1);
    let mut expected = Vector::zeros(n);
    expected.fill(-2);
    expected[n - 1] = (n * n) as i64 - 3;
    assert_eq!(a.matvec(&x).unwrap(), expected);
}

#[test]
fn vector_arithmetic_chain() {
    let n = 5;
    let mut x = range(n, 1);
    x = x * 2;
    let t = &x + &(&x * 2);
    x += &t;
    let t = &x - &(&x * 3);
    x -= &t;
    assert_eq!(x, range(n, 24));
}

#[test]
fn dot_of_range_is_sum_of_squares() {
    let n = 5;
    let x = range(n, 1);
    let expected: i64 = (0..n as i64).map(|i| i * i).sum();
    assert_eq!(dot(&x, &x).unwrap(), expected);
}

#[test]
fn laplacian_inner_product_of_range() {
    let n = 5;
    let a = DenseMatrix::<i64>::laplace_1d(n);
    let x = range(n, 1);
    assert_eq!(adot(&a, &x, &x).unwrap(), (n * (n - 1)) as i64);
}

/// Matrix-vector multiplication for a small random dense matrix, checked
/// against a manual computation.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = DenseMatrix::from_fn(n, n, |i, j| vals[i * n + j]);
    let x = Vector::from_fn(n, |_| rng.r#gen::<f64>());
    let y = a.matvec(&x).unwrap();
    for i in 0..n {
        let expected: f64 = (0..n).map(|j| vals[i * n + j] * x[j]).sum();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
}
