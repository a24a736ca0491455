//! Verdict types for compatibility and deprecation queries
//!
//! Verdicts are plain values built fresh for each query. The reporter turns
//! them into prose; nothing here formats messages beyond `Display`.

use htmlcompat_core::{FeatureKey, TargetRuntime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a compatibility query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCompatibilityVerdict")]
pub struct CompatibilityVerdict {
    is_supported: bool,
    /// Failing targets, in input order
    unsupported_targets: Vec<TargetRuntime>,
    /// Feature whose record decided the verdict
    feature: FeatureKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_url: Option<String>,
}

impl CompatibilityVerdict {
    /// `is_supported` is derived from `unsupported_targets`
    pub fn new(
        feature: FeatureKey,
        unsupported_targets: Vec<TargetRuntime>,
        reference_url: Option<String>,
    ) -> Self {
        Self {
            is_supported: unsupported_targets.is_empty(),
            unsupported_targets,
            feature,
            reference_url,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.is_supported
    }

    pub fn unsupported_targets(&self) -> &[TargetRuntime] {
        &self.unsupported_targets
    }

    pub fn feature(&self) -> &FeatureKey {
        &self.feature
    }

    pub fn reference_url(&self) -> Option<&str> {
        self.reference_url.as_deref()
    }

    /// Unsupported targets as `"runtime version"` strings
    pub fn unsupported_target_names(&self) -> Vec<String> {
        self.unsupported_targets.iter().map(|t| t.to_string()).collect()
    }
}

/// Wire form of `CompatibilityVerdict`; a serialized `is_supported` is
/// ignored and recomputed from `unsupported_targets`
#[derive(Deserialize)]
struct RawCompatibilityVerdict {
    #[serde(default)]
    unsupported_targets: Vec<TargetRuntime>,
    feature: FeatureKey,
    #[serde(default)]
    reference_url: Option<String>,
}

impl From<RawCompatibilityVerdict> for CompatibilityVerdict {
    fn from(raw: RawCompatibilityVerdict) -> Self {
        Self::new(raw.feature, raw.unsupported_targets, raw.reference_url)
    }
}

/// Deprecation state of a feature, before it is tied to a feature key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeprecationStatus {
    pub is_deprecated: bool,
    pub note: Option<String>,
}

impl DeprecationStatus {
    pub fn not_deprecated() -> Self {
        Self::default()
    }

    pub fn deprecated(note: Option<String>) -> Self {
        Self {
            is_deprecated: true,
            note,
        }
    }
}

/// Outcome of a deprecation query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationVerdict {
    is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    feature: FeatureKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_url: Option<String>,
}

impl DeprecationVerdict {
    pub fn new(feature: FeatureKey, status: DeprecationStatus, reference_url: Option<String>) -> Self {
        Self {
            is_deprecated: status.is_deprecated,
            note: status.note,
            feature,
            reference_url,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn feature(&self) -> &FeatureKey {
        &self.feature
    }

    pub fn reference_url(&self) -> Option<&str> {
        self.reference_url.as_deref()
    }
}

impl fmt::Display for CompatibilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_supported {
            return write!(f, "SUPPORTED: {}", self.feature);
        }
        write!(
            f,
            "UNSUPPORTED: {} ({})",
            self.feature,
            self.unsupported_target_names().join(", ")
        )
    }
}

impl fmt::Display for DeprecationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_deprecated {
            return write!(f, "CURRENT: {}", self.feature);
        }
        write!(f, "DEPRECATED: {}", self.feature)?;
        if let Some(note) = &self.note {
            write!(f, ": {}", note)?;
        }
        Ok(())
    }
}
