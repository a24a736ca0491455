//! Resolver configuration
//!
//! The one behavioral fork of the resolvers is what to do when the database
//! has nothing to say about a feature, or about a runtime for an existing
//! feature. Both cases follow the same `MissingDataPolicy`.

use htmlcompat_core::{CompatError, ReferenceLinkBuilder, DEFAULT_REFERENCE_BASE_URL};
use serde::{Deserialize, Serialize};

/// Verdict for features or runtimes absent from the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Assume supported; unknown and custom elements stay quiet
    #[default]
    FailOpen,
    /// Assume unsupported
    FailClosed,
}

impl MissingDataPolicy {
    pub fn assumes_supported(&self) -> bool {
        matches!(self, MissingDataPolicy::FailOpen)
    }
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub missing_data: MissingDataPolicy,

    /// Documentation root used for reference URLs
    #[serde(default = "default_reference_base_url")]
    pub reference_base_url: String,
}

fn default_reference_base_url() -> String {
    DEFAULT_REFERENCE_BASE_URL.to_string()
}

impl ResolverConfig {
    /// Missing data counts as supported
    pub fn fail_open() -> Self {
        Self {
            missing_data: MissingDataPolicy::FailOpen,
            reference_base_url: default_reference_base_url(),
        }
    }

    /// Missing data counts as unsupported
    pub fn fail_closed() -> Self {
        Self {
            missing_data: MissingDataPolicy::FailClosed,
            ..Self::fail_open()
        }
    }

    /// Preset by name; unknown names get the fail-open default
    pub fn for_policy(name: &str) -> Self {
        match name {
            "fail_closed" | "fail-closed" | "strict" => Self::fail_closed(),
            _ => Self::fail_open(),
        }
    }

    /// Load configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, CompatError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CompatError::Config(format!("Failed to parse resolver config: {}", e)))
    }

    pub fn with_missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = policy;
        self
    }

    pub fn with_reference_base_url(mut self, url: impl Into<String>) -> Self {
        self.reference_base_url = url.into();
        self
    }

    pub(crate) fn link_builder(&self) -> ReferenceLinkBuilder {
        ReferenceLinkBuilder::new(self.reference_base_url.as_str())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::fail_open()
    }
}
