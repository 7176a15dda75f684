//! LRU cache of top-level calculator results.

use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;
use num_bigint::BigUint;

/// Cache key: the query a result answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// `F(n)`.
    Fibonacci(u64),
    /// `C(n, m)`.
    Binomial(u64, u64),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Fibonacci(n) => write!(f, "fibonacci({})", n),
            Query::Binomial(n, m) => write!(f, "binomial({}, {})", n, m),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Current number of entries.
    pub size: usize,

    /// Maximum capacity.
    pub capacity: usize,

    /// Number of cache hits.
    pub hits: u64,

    /// Number of cache misses.
    pub misses: u64,
}

impl CacheStats {
    /// Computes the hit rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded cache of results that survives across top-level calls.
///
/// Results are pure functions of their query, so entries never expire and
/// are never replaced. Eviction only forgets a value; asking again simply
/// recomputes the same number.
pub struct ResultCache {
    cache: LruCache<Query, BigUint>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Creates a new cache holding at most `capacity` results.
    ///
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up a result, refreshing its recency on a hit.
    pub fn get(&mut self, query: &Query) -> Option<&BigUint> {
        match self.cache.get(query) {
            Some(value) => {
                self.hits += 1;
                tracing::debug!(%query, "result cache hit");
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores a result. An existing entry for the same query is kept as is.
    pub fn insert(&mut self, query: Query, value: BigUint) {
        if self.cache.contains(&query) {
            return;
        }
        if let Some((evicted, _)) = self.cache.push(query, value) {
            tracing::trace!(query = %evicted, "result cache eviction");
        }
    }

    /// Returns true if the query has a cached result. Does not touch recency or stats.
    pub fn contains(&self, query: &Query) -> bool {
        self.cache.contains(query)
    }

    /// Clears all entries. Statistics are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("stats", &self.stats())
            .finish()
    }
}
