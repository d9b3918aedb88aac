use thiserror::Error;

// Unified error type for cgsolve

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("shape mismatch: expected length {expected}, got {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("conjugate gradient breakdown (p^T A p = 0) at iteration {iteration}")]
    Breakdown { iteration: usize },
}
