//! Numeric version comparison.
//!
//! Versions are sequences of non-negative integers separated by a
//! delimiter (`.` by default). They are compared left to right with absent
//! trailing components treated as zero. Malformed input is an error, never
//! silently coerced to a number.

mod comparator;
mod parsed;

pub use comparator::VersionComparator;
pub use parsed::Version;

use crate::MemokitResult;

/// Compares two `.`-separated versions, returning `-1`, `0` or `1`.
pub fn compare_version(lhs: &str, rhs: &str) -> MemokitResult<i8> {
    VersionComparator::default().compare_version(lhs, rhs)
}

/// True when `lhs` is an older version than `rhs`.
pub fn less_than(lhs: &str, rhs: &str) -> MemokitResult<bool> {
    VersionComparator::default().less_than(lhs, rhs)
}

/// True when `lhs` is a newer version than `rhs`.
pub fn greater_than(lhs: &str, rhs: &str) -> MemokitResult<bool> {
    VersionComparator::default().greater_than(lhs, rhs)
}

/// True when both versions are equal once padded with zeros.
pub fn equal(lhs: &str, rhs: &str) -> MemokitResult<bool> {
    VersionComparator::default().equal(lhs, rhs)
}
