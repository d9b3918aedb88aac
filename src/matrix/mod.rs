//! Matrix module: dense storage and matrix-free operators.

pub mod dense;
pub use dense::DenseMatrix;
pub mod operator;
pub use operator::Laplace1d;
