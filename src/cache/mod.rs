//! Cross-call result cache.
//!
//! The memo tables used while computing a single value are scratch space
//! and start empty on every top-level call. This module keeps the final
//! answers around between calls, bounded by an LRU policy.

mod lru;

pub use self::lru::{CacheStats, Query, ResultCache};
