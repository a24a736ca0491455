//! Target ignore list
//!
//! Applied to a resolved target list before it reaches the resolver. An
//! entry is either a bare runtime (`"ie"`), which drops every version, or an
//! exact `"runtime version"` pair (`"ie 11"`).

use htmlcompat_core::{compare_versions, normalize_runtime_key, CompatError, TargetRuntime};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
enum IgnoreEntry {
    Runtime(String),
    Target(TargetRuntime),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFilter {
    entries: Vec<IgnoreEntry>,
}

impl TargetFilter {
    /// Filter that keeps every target
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self, CompatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if entry.contains(char::is_whitespace) {
                filter.entries.push(IgnoreEntry::Target(entry.parse()?));
            } else {
                filter.entries.push(IgnoreEntry::Runtime(entry.to_string()));
            }
        }
        Ok(filter)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `target` matches an ignore entry. Runtime keys match either
    /// verbatim or after alias normalization.
    pub fn is_ignored(&self, target: &TargetRuntime) -> bool {
        self.entries.iter().any(|entry| match entry {
            IgnoreEntry::Runtime(runtime) => same_runtime(runtime, &target.runtime),
            IgnoreEntry::Target(ignored) => {
                same_runtime(&ignored.runtime, &target.runtime)
                    && compare_versions(&ignored.version, &target.version) == Ordering::Equal
            }
        })
    }

    /// Targets not ignored, in their original order
    pub fn apply(&self, targets: &[TargetRuntime]) -> Vec<TargetRuntime> {
        targets
            .iter()
            .filter(|t| !self.is_ignored(t))
            .cloned()
            .collect()
    }
}

fn same_runtime(a: &str, b: &str) -> bool {
    a == b || normalize_runtime_key(a) == normalize_runtime_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Vec<TargetRuntime> {
        vec![
            TargetRuntime::new("ie", "11"),
            TargetRuntime::new("firefox", "50"),
            TargetRuntime::new("ie", "10"),
            TargetRuntime::new("ios_saf", "15.4"),
        ]
    }

    #[test]
    fn test_exact_target() {
        let filter = TargetFilter::from_entries(["ie 11"]).unwrap();
        let kept = filter.apply(&targets());
        assert_eq!(
            kept,
            vec![
                TargetRuntime::new("firefox", "50"),
                TargetRuntime::new("ie", "10"),
                TargetRuntime::new("ios_saf", "15.4"),
            ]
        );
    }

    #[test]
    fn test_bare_runtime() {
        let filter = TargetFilter::from_entries(vec!["ie".to_string()]).unwrap();
        let kept = filter.apply(&targets());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|t| t.runtime != "ie"));
    }

    #[test]
    fn test_alias_matches() {
        let filter = TargetFilter::from_entries(["safari_ios"]).unwrap();
        assert!(filter.is_ignored(&TargetRuntime::new("ios_saf", "15.4")));
    }

    #[test]
    fn test_version_equivalence() {
        let filter = TargetFilter::from_entries(["ie 11.0"]).unwrap();
        assert!(filter.is_ignored(&TargetRuntime::new("ie", "11")));
        assert!(!filter.is_ignored(&TargetRuntime::new("ie", "10")));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = TargetFilter::from_entries(["", "  "]).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&targets()), targets());
        assert_eq!(TargetFilter::none().apply(&targets()), targets());
    }

    #[test]
    fn test_malformed_entry() {
        assert!(TargetFilter::from_entries(["ie 11 12"]).is_err());
    }
}
