//! Exact integer and statistics helpers behind the calculator endpoints.
//!
//! Results of `factorial` and `fibonacci` grow without bound, so they are
//! computed as [`BigUint`]. Callers pass a ceiling on `n` to keep a single
//! request from running for minutes.

mod error;

pub use error::MathError;
pub use num_bigint::BigUint;

use num_traits::{One, Zero};

/// Compute `n!` exactly.
///
/// `max` caps the accepted input; `n` above it fails with [`MathError::TooLarge`].
pub fn factorial(n: i64, max: u64) -> Result<BigUint, MathError> {
    let n = check_input(n, max)?;
    Ok((2..=n).fold(BigUint::one(), |acc, k| acc * k))
}

/// Compute the `n`-th Fibonacci number exactly, with `F(0) = 0` and `F(1) = 1`.
pub fn fibonacci(n: i64, max: u64) -> Result<BigUint, MathError> {
    let n = check_input(n, max)?;
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    Ok(a)
}

/// Arithmetic mean of a non-empty slice.
///
/// Fails with [`MathError::NonFinite`] when the sum overflows.
pub fn mean(values: &[f64]) -> Result<f64, MathError> {
    if values.is_empty() {
        return Err(MathError::EmptyInput);
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if !mean.is_finite() {
        return Err(MathError::NonFinite);
    }
    Ok(mean)
}

fn check_input(n: i64, max: u64) -> Result<u64, MathError> {
    let n = u64::try_from(n).map_err(|_| MathError::Negative(n))?;
    if n > max {
        return Err(MathError::TooLarge { n, max });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "1")]
    #[case(1, "1")]
    #[case(5, "120")]
    #[case(20, "2432902008176640000")]
    #[case(25, "15511210043330985984000000")]
    fn test_factorial(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(factorial(n, 100).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(1, "1")]
    #[case(2, "1")]
    #[case(10, "55")]
    #[case(100, "354224848179261915075")]
    fn test_fibonacci(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(fibonacci(n, 1000).unwrap().to_string(), expected);
    }

    #[test]
    fn test_negative_input() {
        assert_eq!(factorial(-1, 100), Err(MathError::Negative(-1)));
        assert_eq!(fibonacci(-3, 100), Err(MathError::Negative(-3)));
    }

    #[test]
    fn test_input_ceiling() {
        assert_eq!(factorial(101, 100), Err(MathError::TooLarge { n: 101, max: 100 }));
        assert!(fibonacci(100, 100).is_ok());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(mean(&[-2.0]).unwrap(), -2.0);
    }

    #[test]
    fn test_mean_overflow() {
        assert_eq!(mean(&[f64::MAX, f64::MAX]), Err(MathError::NonFinite));
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(mean(&[]), Err(MathError::EmptyInput));
    }
}
