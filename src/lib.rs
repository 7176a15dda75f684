//! # memokit
//!
//! Small pure computations: memoized combinatorics and numeric version
//! comparison.
//!
//! ## Modules
//!
//! - [`calc`] - Fibonacci numbers and binomial coefficients with memoization
//! - [`version`] - Component-wise version comparison
//! - [`cache`] - LRU cache for results kept between calls
//! - [`cli`] - Command line interface
//! - [`types`] - Shared types (config, errors)

pub mod cache;
pub mod calc;
#[cfg(feature = "cli")]
pub mod cli;
pub mod types;
pub mod version;

pub use calc::{binomial, fibonacci, gcd, MemoCalculator};
pub use types::config::Config;
pub use types::errors::{MemokitError, MemokitResult};
pub use version::{compare_version, Version, VersionComparator};
