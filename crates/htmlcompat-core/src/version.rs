//! Dotted numeric version ordering
//!
//! Versions are split on `.`, every component is reduced to its ASCII digits
//! and parsed as an unsigned integer. A component with no digits, or one that
//! overflows, counts as `0`. Missing trailing components count as `0`, so
//! `"11"`, `"11.0"` and `"11.0b"` are all the same version.

use std::cmp::Ordering;
use std::fmt;

/// A parsed version; trailing zero components are dropped so that derived
/// equality and ordering match zero-padded component comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    /// Parse a version string. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut parts: Vec<u64> = raw.split('.').map(parse_component).collect();
        while parts.last() == Some(&0) {
            parts.pop();
        }
        Self { parts }
    }

    /// Numeric components, without trailing zeros
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.parts.is_empty() {
            return f.write_str("0");
        }
        let joined = self
            .parts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

fn parse_component(component: &str) -> u64 {
    let digits: String = component.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Compare two dotted version strings component by component
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}
