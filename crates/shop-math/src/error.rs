//! Calculator error types.

use thiserror::Error;

/// Errors that can occur in calculator operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Input must not be negative.
    #[error("input must be a non-negative integer, got {0}")]
    Negative(i64),

    /// Input is above the configured ceiling.
    #[error("input {n} exceeds the maximum of {max}")]
    TooLarge { n: u64, max: u64 },

    /// Mean of an empty list.
    #[error("cannot average an empty list")]
    EmptyInput,

    /// Result overflowed `f64`.
    #[error("result is not a finite number")]
    NonFinite,
}
