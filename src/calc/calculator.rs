//! Caller-held calculator with input limits and an optional result cache.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::binomial::BinomialMemo;
use super::fibonacci::FibonacciMemo;
use crate::cache::{CacheStats, Query, ResultCache};
use crate::types::config::{default_max_cells, default_max_index, Config};
use crate::{MemokitError, MemokitResult};

/// Memoized Fibonacci and binomial calculator.
///
/// Every top-level call evaluates against a fresh scratch memo. When a
/// result cache is attached, final answers are also kept between calls so
/// a repeated query is answered without recomputation.
///
/// Methods take `&mut self` and nothing is locked internally. To share one
/// calculator between threads, wrap it in a `Mutex`.
#[derive(Debug)]
pub struct MemoCalculator {
    max_index: u64,
    max_cells: u64,
    results: Option<ResultCache>,
}

impl MemoCalculator {
    /// Creates a calculator with the default limits and no result cache.
    pub fn new() -> Self {
        Self {
            max_index: default_max_index(),
            max_cells: default_max_cells(),
            results: None,
        }
    }

    /// Creates a calculator from the `[limits]` and `[cache]` sections.
    pub fn from_config(config: &Config) -> Self {
        let calculator = Self::new()
            .with_max_index(config.limits.max_index)
            .with_max_cells(config.limits.max_cells);
        if config.cache.enabled {
            calculator.with_cache(config.cache.capacity)
        } else {
            calculator
        }
    }

    /// Sets the largest accepted `n`.
    pub fn with_max_index(mut self, max_index: u64) -> Self {
        self.max_index = max_index;
        self
    }

    /// Sets the largest binomial memo table, see [`binomial`](Self::binomial).
    pub fn with_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Attaches a result cache holding up to `capacity` answers.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.results = Some(ResultCache::new(capacity));
        self
    }

    /// Largest accepted `n`.
    pub fn max_index(&self) -> u64 {
        self.max_index
    }

    /// Largest binomial memo table.
    pub fn max_cells(&self) -> u64 {
        self.max_cells
    }

    /// Computes the `n`-th Fibonacci number.
    ///
    /// # Errors
    /// - `InvalidArgument` if `n` is negative
    /// - `LimitExceeded` if `n` is above the configured maximum
    pub fn fibonacci(&mut self, n: i64) -> MemokitResult<BigUint> {
        let n = self.check_index("n", n)?;
        let index = usize::try_from(n).map_err(|_| MemokitError::LimitExceeded {
            what: "n",
            value: n,
            limit: usize::MAX as u64,
        })?;

        self.cached_or_compute(Query::Fibonacci(n), || {
            FibonacciMemo::new().get(index).clone()
        })
    }

    /// Computes the binomial coefficient `C(n, m)`.
    ///
    /// `m` is folded to `min(m, n - m)` first, so `C(n, m)` and `C(n, n - m)`
    /// share work and cache entries. The memo table then spans at most
    /// `(n - m + 1) * (m + 1)` cells, each holding a number of up to `n`
    /// bits, and that count is checked against `max_cells` up front.
    ///
    /// # Errors
    /// - `InvalidArgument` if either argument is negative or `m > n`
    /// - `LimitExceeded` if `n` is above the configured maximum or the memo
    ///   table would exceed `max_cells`
    pub fn binomial(&mut self, n: i64, m: i64) -> MemokitResult<BigUint> {
        let m = non_negative("m", m)?;
        let n = self.check_index("n", n)?;
        if m > n {
            tracing::debug!(n, m, "rejected binomial arguments");
            return Err(MemokitError::invalid_argument(format!(
                "m must not exceed n, got n={} and m={}",
                n, m
            )));
        }

        let m = m.min(n - m);
        let cells = (n - m + 1).saturating_mul(m + 1);
        if cells > self.max_cells {
            tracing::debug!(n, m, cells, limit = self.max_cells, "binomial table above limit");
            return Err(MemokitError::LimitExceeded {
                what: "binomial memo cells",
                value: cells,
                limit: self.max_cells,
            });
        }

        self.cached_or_compute(Query::Binomial(n, m), || BinomialMemo::new().get(n, m))
    }

    /// Fixed-width form of [`fibonacci`](Self::fibonacci).
    ///
    /// Fails with `Overflow` when the result does not fit in `u64`.
    pub fn fibonacci_u64(&mut self, n: i64) -> MemokitResult<u64> {
        let value = self.fibonacci(n)?;
        fit_u64(&value, || format!("fibonacci({})", n))
    }

    /// Fixed-width form of [`binomial`](Self::binomial).
    ///
    /// Fails with `Overflow` when the result does not fit in `u64`.
    pub fn binomial_u64(&mut self, n: i64, m: i64) -> MemokitResult<u64> {
        let value = self.binomial(n, m)?;
        fit_u64(&value, || format!("binomial({}, {})", n, m))
    }

    /// Result cache statistics, if a cache is attached.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.results.as_ref().map(ResultCache::stats)
    }

    /// Drops every cached result.
    pub fn clear_cache(&mut self) {
        if let Some(results) = self.results.as_mut() {
            results.clear();
        }
    }

    fn check_index(&self, name: &str, value: i64) -> MemokitResult<u64> {
        let value = non_negative(name, value)?;
        if value > self.max_index {
            tracing::debug!(value, limit = self.max_index, "input above limit");
            return Err(MemokitError::LimitExceeded {
                what: "n",
                value,
                limit: self.max_index,
            });
        }
        Ok(value)
    }

    fn cached_or_compute<F>(&mut self, query: Query, compute: F) -> MemokitResult<BigUint>
    where
        F: FnOnce() -> BigUint,
    {
        if let Some(value) = self.results.as_mut().and_then(|r| r.get(&query)) {
            return Ok(value.clone());
        }

        let value = compute();
        tracing::debug!(%query, bits = value.bits(), "computed");

        if let Some(results) = self.results.as_mut() {
            results.insert(query, value.clone());
        }
        Ok(value)
    }
}

impl Default for MemoCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(name: &str, value: i64) -> MemokitResult<u64> {
    u64::try_from(value).map_err(|_| {
        tracing::debug!(name, value, "rejected negative argument");
        MemokitError::invalid_argument(format!("{} must be non-negative, got {}", name, value))
    })
}

fn fit_u64<F>(value: &BigUint, describe: F) -> MemokitResult<u64>
where
    F: FnOnce() -> String,
{
    value.to_u64().ok_or_else(|| {
        MemokitError::Overflow(format!("{} has {} bits", describe(), value.bits()))
    })
}
