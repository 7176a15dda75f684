//! Version comparison with a configurable delimiter.

use std::cmp::Ordering;

use super::parsed::Version;
use crate::types::config::VersionConfig;
use crate::MemokitResult;

/// Compares version strings component by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionComparator {
    delimiter: char,
}

impl VersionComparator {
    /// Creates a comparator splitting on `delimiter`.
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Creates a comparator from the `[version]` config section.
    pub fn from_config(config: &VersionConfig) -> Self {
        Self::new(config.delimiter)
    }

    /// Component delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parses a version with this comparator's delimiter.
    pub fn parse(&self, input: &str) -> MemokitResult<Version> {
        Version::parse_with(input, self.delimiter)
    }

    /// Orders `lhs` relative to `rhs`. Both sides are validated first.
    pub fn compare(&self, lhs: &str, rhs: &str) -> MemokitResult<Ordering> {
        let left = self.parse(lhs)?;
        let right = self.parse(rhs)?;
        let ordering = left.cmp(&right);
        tracing::trace!(lhs, rhs, ?ordering, "compared versions");
        Ok(ordering)
    }

    /// Returns `-1`, `0` or `1`.
    pub fn compare_version(&self, lhs: &str, rhs: &str) -> MemokitResult<i8> {
        Ok(self.compare(lhs, rhs)? as i8)
    }

    /// True when `lhs` is older than `rhs`.
    pub fn less_than(&self, lhs: &str, rhs: &str) -> MemokitResult<bool> {
        Ok(self.compare(lhs, rhs)?.is_lt())
    }

    /// True when `lhs` is newer than `rhs`.
    pub fn greater_than(&self, lhs: &str, rhs: &str) -> MemokitResult<bool> {
        Ok(self.compare(lhs, rhs)?.is_gt())
    }

    /// True when both versions are equal once padded with zeros.
    pub fn equal(&self, lhs: &str, rhs: &str) -> MemokitResult<bool> {
        Ok(self.compare(lhs, rhs)?.is_eq())
    }
}

impl Default for VersionComparator {
    fn default() -> Self {
        Self::new('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemokitError;

    #[test]
    fn test_compare_version_signal() {
        let cmp = VersionComparator::default();
        assert_eq!(cmp.compare_version("1.2.0", "1.2.1").unwrap(), -1);
        assert_eq!(cmp.compare_version("1.3", "1.2.1").unwrap(), 1);
        assert_eq!(cmp.compare_version("1.2", "1.2.0").unwrap(), 0);
    }

    #[test]
    fn test_predicates() {
        let cmp = VersionComparator::default();
        assert!(!cmp.less_than("1.3", "1.2.1").unwrap());
        assert!(cmp.greater_than("1.3", "1.2.1").unwrap());
        assert!(cmp.equal("1.2", "1.2.0").unwrap());
        assert!(cmp.less_than("0.9", "0.10").unwrap());
    }

    #[test]
    fn test_invalid_side_is_reported() {
        let cmp = VersionComparator::default();
        let err = cmp.compare("1.x", "1.2").unwrap_err();
        assert!(matches!(err, MemokitError::InvalidFormat { ref input, .. } if input == "1.x"));

        let err = cmp.compare("1.2", "").unwrap_err();
        assert!(matches!(err, MemokitError::InvalidFormat { .. }));
    }

    #[test]
    fn test_custom_delimiter() {
        let cmp = VersionComparator::new('_');
        assert_eq!(cmp.delimiter(), '_');
        assert_eq!(cmp.compare_version("2_0_1", "2_0").unwrap(), 1);
        assert!(cmp.compare("2.0", "2_0").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = VersionConfig { delimiter: '-' };
        let cmp = VersionComparator::from_config(&config);
        assert!(cmp.equal("3-0", "3").unwrap());
    }
}
