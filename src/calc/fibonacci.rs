//! Fibonacci numbers over a growing memo.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Ordered memo of Fibonacci numbers, where `values[i]` holds `F(i)`.
///
/// The memo only grows. Asking for an index past the end extends it
/// bottom-up, one entry at a time, so no value is ever computed twice and
/// no recursion is involved regardless of how large `n` is.
#[derive(Debug, Clone)]
pub struct FibonacciMemo {
    values: Vec<BigUint>,
}

impl FibonacciMemo {
    /// Creates a memo seeded with `F(0) = 0` and `F(1) = 1`.
    pub fn new() -> Self {
        Self {
            values: vec![BigUint::zero(), BigUint::one()],
        }
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, the base cases are seeded on construction.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `F(n)` if it has already been computed.
    pub fn cached(&self, n: usize) -> Option<&BigUint> {
        self.values.get(n)
    }

    /// Returns `F(n)`, extending the memo up to `n` when needed.
    pub fn get(&mut self, n: usize) -> &BigUint {
        if n >= self.values.len() {
            tracing::trace!(from = self.values.len(), to = n, "extending fibonacci memo");
            self.values.reserve(n + 1 - self.values.len());
        }

        while self.values.len() <= n {
            let len = self.values.len();
            let next = &self.values[len - 1] + &self.values[len - 2];
            self.values.push(next);
        }

        &self.values[n]
    }
}

impl Default for FibonacciMemo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(*memo.get(0), BigUint::zero());
        assert_eq!(*memo.get(1), BigUint::one());
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_known_values() {
        let mut memo = FibonacciMemo::new();
        assert_eq!(*memo.get(10), BigUint::from(55u32));
        assert_eq!(*memo.get(20), BigUint::from(6765u32));
        assert_eq!(*memo.get(50), BigUint::from(12_586_269_025u64));
    }

    #[test]
    fn test_memo_grows_and_is_reused() {
        let mut memo = FibonacciMemo::new();
        memo.get(30);
        assert_eq!(memo.len(), 31);

        // Smaller indices are served from the memo without growth
        memo.get(12);
        assert_eq!(memo.len(), 31);
        assert_eq!(memo.cached(12), Some(&BigUint::from(144u32)));
        assert!(memo.cached(31).is_none());
    }

    #[test]
    fn test_beyond_u64() {
        // F(94) is the first Fibonacci number that overflows u64
        let mut memo = FibonacciMemo::new();
        let expected: BigUint = "19740274219868223167".parse().unwrap();
        assert_eq!(*memo.get(94), expected);
    }
}
