//! Lint rule options
//!
//! Targets arrive already resolved: either `"runtime version"` strings or
//! structured `{runtime, version}` entries. Turning a query expression such
//! as `"> 1%, last 2 versions"` into targets is the caller's job.

use htmlcompat_core::{CompatError, TargetRuntime};
use htmlcompat_resolver::{ResolverConfig, TargetFilter};
use serde::{Deserialize, Serialize};

/// JSX-only props that have no HTML attribute counterpart
pub const JSX_ONLY_ATTRIBUTES: [&str; 4] = ["classname", "htmlfor", "defaultvalue", "defaultchecked"];

/// One configured target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    /// `"ie 11"`
    Query(String),
    Target(TargetRuntime),
}

impl TargetSpec {
    pub fn to_target(&self) -> Result<TargetRuntime, CompatError> {
        match self {
            TargetSpec::Query(query) => query.parse(),
            TargetSpec::Target(target) => Ok(target.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintOptions {
    #[serde(default)]
    pub targets: Vec<TargetSpec>,

    /// `"runtime"` or `"runtime version"` entries dropped from `targets`
    #[serde(default)]
    pub ignore_runtimes: Vec<String>,

    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Attribute names never checked
    #[serde(default = "default_skip_attributes")]
    pub skip_attributes: Vec<String>,
}

fn default_skip_attributes() -> Vec<String> {
    JSX_ONLY_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            ignore_runtimes: Vec::new(),
            resolver: ResolverConfig::default(),
            skip_attributes: default_skip_attributes(),
        }
    }
}

impl LintOptions {
    /// Options checking against the given `"runtime version"` targets
    pub fn for_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(|t| TargetSpec::Query(t.into())).collect(),
            ..Self::default()
        }
    }

    pub fn ignoring<I, S>(mut self, runtimes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_runtimes.extend(runtimes.into_iter().map(Into::into));
        self
    }

    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CompatError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CompatError::Config(format!("Failed to parse lint options: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, CompatError> {
        serde_json::from_str(json)
            .map_err(|e| CompatError::Config(format!("Failed to parse lint options: {}", e)))
    }

    /// Configured targets minus ignored ones, in configuration order
    pub fn resolve_targets(&self) -> Result<Vec<TargetRuntime>, CompatError> {
        let targets = self
            .targets
            .iter()
            .map(TargetSpec::to_target)
            .collect::<Result<Vec<_>, _>>()?;
        let filter = TargetFilter::from_entries(&self.ignore_runtimes)?;
        Ok(filter.apply(&targets))
    }

    pub(crate) fn skips_attribute(&self, attribute: &str) -> bool {
        self.skip_attributes
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(attribute))
    }
}
