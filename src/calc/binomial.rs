//! Binomial coefficients via Pascal's rule with a two-level memo.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::One;

/// Memo of binomial coefficients keyed first by `n`, then by `m`.
///
/// Evaluation is top-down like the textbook recursion
/// `C(n, m) = C(n-1, m-1) + C(n-1, m)`, but driven by an explicit work
/// stack so deep inputs cannot exhaust the call stack. Each `(n, m)` pair
/// reachable from the query is computed at most once.
#[derive(Debug, Clone, Default)]
pub struct BinomialMemo {
    table: HashMap<u64, HashMap<u64, BigUint>>,
}

impl BinomialMemo {
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized `(n, m)` pairs. Base cases are not stored.
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `C(n, m)` if it is a base case or already memoized.
    pub fn cached(&self, n: u64, m: u64) -> Option<BigUint> {
        if m == 0 || m == n {
            return Some(BigUint::one());
        }
        self.table.get(&n).and_then(|row| row.get(&m)).cloned()
    }

    /// Returns `C(n, m)`. Callers must guarantee `m <= n`.
    ///
    /// `m` is folded to `min(m, n - m)`, so the table never holds more than
    /// `(n - m + 1) * (m + 1)` cells for the folded `m`.
    pub fn get(&mut self, n: u64, m: u64) -> BigUint {
        debug_assert!(m <= n, "binomial requires m <= n");
        let m = m.min(n - m);

        let mut stack = vec![(n, m)];
        let mut last = BigUint::one();

        while let Some(&(a, b)) = stack.last() {
            if let Some(value) = self.cached(a, b) {
                last = value;
                stack.pop();
                continue;
            }

            // Not a base case, so 0 < b < a
            let left = self.cached(a - 1, b - 1);
            let right = self.cached(a - 1, b);

            match (left, right) {
                (Some(left), Some(right)) => {
                    let value = left + right;
                    self.insert(a, b, value.clone());
                    last = value;
                    stack.pop();
                }
                (left, right) => {
                    if right.is_none() {
                        stack.push((a - 1, b));
                    }
                    if left.is_none() {
                        stack.push((a - 1, b - 1));
                    }
                }
            }
        }

        // The bottom frame is (n, m), so the last resolved value is the answer
        last
    }

    fn insert(&mut self, n: u64, m: u64, value: BigUint) {
        let row = self.table.entry(n).or_default();
        debug_assert!(!row.contains_key(&m), "memo entries are written once");
        row.entry(m).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        let mut memo = BinomialMemo::new();
        assert_eq!(memo.get(5, 0), BigUint::one());
        assert_eq!(memo.get(5, 5), BigUint::one());
        assert_eq!(memo.get(0, 0), BigUint::one());
        assert!(memo.is_empty());
    }

    #[test]
    fn test_known_values() {
        let mut memo = BinomialMemo::new();
        assert_eq!(memo.get(5, 2), BigUint::from(10u32));
        assert_eq!(memo.get(10, 3), BigUint::from(120u32));
        assert_eq!(memo.get(52, 5), BigUint::from(2_598_960u32));
    }

    #[test]
    fn test_shared_subproblems_are_memoized() {
        let mut memo = BinomialMemo::new();
        memo.get(10, 5);
        let after_first = memo.len();
        assert!(after_first > 0);

        // C(9, 4) lies inside the first query's recursion tree
        assert_eq!(memo.cached(9, 4), Some(BigUint::from(126u32)));
        memo.get(9, 4);
        assert_eq!(memo.len(), after_first);
    }

    #[test]
    fn test_near_diagonal_memo_stays_small() {
        let mut memo = BinomialMemo::new();
        assert_eq!(memo.get(1_000, 999), BigUint::from(1_000u32));
        assert!(memo.len() < 1_000, "memo grew to {} entries", memo.len());

        // The folded query reuses the same table
        let before = memo.len();
        assert_eq!(memo.get(1_000, 1), BigUint::from(1_000u32));
        assert_eq!(memo.len(), before);
    }

    #[test]
    fn test_deep_input_does_not_overflow_stack() {
        let mut memo = BinomialMemo::new();
        let value = memo.get(2_000, 3);
        // 2000 * 1999 * 1998 / 6
        assert_eq!(value, BigUint::from(1_331_334_000u64));
    }

    #[test]
    fn test_beyond_u64() {
        let mut memo = BinomialMemo::new();
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(memo.get(100, 50), expected);
    }
}
