//! Memoized combinatorics.
//!
//! Fibonacci numbers and binomial coefficients are computed exactly as
//! arbitrary-precision integers. The free functions below start from an
//! empty memo on every call; hold a [`MemoCalculator`] to configure limits
//! or keep results between calls.

mod binomial;
mod calculator;
mod fibonacci;
mod gcd;

pub use binomial::BinomialMemo;
pub use calculator::MemoCalculator;
pub use fibonacci::FibonacciMemo;
pub use gcd::gcd;

use num_bigint::BigUint;

use crate::MemokitResult;

/// Returns the `n`-th Fibonacci number, with `fibonacci(0) == 0`.
///
/// Negative `n` is rejected with `InvalidArgument`.
pub fn fibonacci(n: i64) -> MemokitResult<BigUint> {
    MemoCalculator::new().fibonacci(n)
}

/// Returns the binomial coefficient `C(n, m)`.
///
/// Requires `0 <= m <= n`, otherwise fails with `InvalidArgument`.
pub fn binomial(n: i64, m: i64) -> MemokitResult<BigUint> {
    MemoCalculator::new().binomial(n, m)
}
