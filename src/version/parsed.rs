//! Parsed numeric version.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{MemokitError, MemokitResult};

/// A version made of non-negative integer components, such as `1.2.0`.
///
/// Missing trailing components count as zero, so `1.2` and `1.2.0` compare
/// equal and hash the same.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parses a `.`-separated version.
    pub fn parse(input: &str) -> MemokitResult<Self> {
        Self::parse_with(input, '.')
    }

    /// Parses a version using a custom delimiter.
    ///
    /// Every component must be a plain run of ASCII digits. Empty
    /// components, signs, whitespace and values above `u64::MAX` are
    /// rejected with `InvalidFormat`.
    pub fn parse_with(input: &str, delimiter: char) -> MemokitResult<Self> {
        if input.is_empty() {
            return Err(MemokitError::invalid_format(input, "version is empty"));
        }

        let components = input
            .split(delimiter)
            .enumerate()
            .map(|(index, part)| parse_component(input, index, part))
            .collect::<MemokitResult<Vec<_>>>()?;

        Ok(Self { components })
    }

    /// Components as written, including trailing zeros.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Components with trailing zeros removed.
    fn significant(&self) -> &[u64] {
        let end = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..end]
    }
}

fn parse_component(input: &str, index: usize, part: &str) -> MemokitResult<u64> {
    if part.is_empty() {
        return Err(MemokitError::invalid_format(
            input,
            format!("component {} is empty", index),
        ));
    }

    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MemokitError::invalid_format(
            input,
            format!("component {} ('{}') is not a non-negative integer", index, part),
        ));
    }

    part.parse::<u64>().map_err(|_| {
        MemokitError::invalid_format(
            input,
            format!("component {} ('{}') is out of range", index, part),
        )
    })
}

impl FromStr for Version {
    type Err = MemokitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // With trailing zeros stripped, a strict prefix always ends before a
        // non-zero component of the longer side, so slice order matches
        // zero-padded component-wise order.
        self.significant().cmp(other.significant())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(v("1.2.0").components(), &[1, 2, 0]);
        assert_eq!(v("10").components(), &[10]);
        assert_eq!(v("01.002").components(), &[1, 2]);
    }

    #[test]
    fn test_parse_with_delimiter() {
        let version = Version::parse_with("4-1-7", '-').unwrap();
        assert_eq!(version.components(), &[4, 1, 7]);
        assert!(Version::parse_with("4.1", '-').is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "1.x", "1..2", ".1", "1.", "-1.0", "+1", " 1", "1.2 ", "1.2a"] {
            let err = Version::parse(input).unwrap_err();
            assert!(
                matches!(err, MemokitError::InvalidFormat { .. }),
                "expected InvalidFormat for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = Version::parse("1.18446744073709551616").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.2.0") < v("1.2.1"));
        assert!(v("1.3") > v("1.2.1"));
        assert!(v("1.10") > v("1.9"));
        assert!(v("2") > v("1.99.99"));
        assert!(v("1.2") < v("1.2.0.1"));
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert_eq!(v("1.2"), v("1.2.0"));
        assert_eq!(v("1.2"), v("1.2.0.0"));
        assert_eq!(v("0"), v("0.0"));

        let set: HashSet<Version> = ["1.2", "1.2.0", "1.2.0.0"].iter().map(|s| v(s)).collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_keeps_components() {
        assert_eq!(v("1.2.0").to_string(), "1.2.0");
        assert_eq!(Version::parse_with("3-4", '-').unwrap().to_string(), "3.4");
    }
}
