//! Raw records of the compatibility dataset
//!
//! These mirror the `__compat` blocks of the dataset closely enough to
//! deserialize it directly. Only `version_added` and `status.deprecated`
//! drive verdicts; the other fields are carried for callers that want them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `version_added` / `version_removed` value of a support statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionAdded {
    /// `true`: supported in every version, `false`: never supported
    Flag(bool),
    /// First supporting version, possibly ranged (`"≤37"`) or `"preview"`
    Version(String),
}

/// One way a runtime implements a feature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupportStatement {
    /// `None` when the dataset records `null` or omits the field
    #[serde(default)]
    pub version_added: Option<VersionAdded>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_removed: Option<VersionAdded>,

    /// Vendor prefix this statement applies to (ex: `-webkit-`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial_implementation: bool,
}

impl SupportStatement {
    /// Supported since `version`
    pub fn since(version: impl Into<String>) -> Self {
        Self {
            version_added: Some(VersionAdded::Version(version.into())),
            ..Default::default()
        }
    }

    /// Supported in every version
    pub fn always() -> Self {
        Self {
            version_added: Some(VersionAdded::Flag(true)),
            ..Default::default()
        }
    }

    /// Never supported
    pub fn never() -> Self {
        Self {
            version_added: Some(VersionAdded::Flag(false)),
            ..Default::default()
        }
    }

    /// Support status not recorded (`version_added: null`)
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_alternative_name(mut self, name: impl Into<String>) -> Self {
        self.alternative_name = Some(name.into());
        self
    }
}

/// Support of one runtime: a single statement or a list of alternatives
/// (prefixed, renamed, ...) of which any one suffices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupportRecord {
    Alternatives(Vec<SupportStatement>),
    Single(SupportStatement),
}

impl SupportRecord {
    pub fn statements(&self) -> &[SupportStatement] {
        match self {
            SupportRecord::Alternatives(list) => list,
            SupportRecord::Single(statement) => std::slice::from_ref(statement),
        }
    }
}

impl From<SupportStatement> for SupportRecord {
    fn from(statement: SupportStatement) -> Self {
        SupportRecord::Single(statement)
    }
}

impl From<Vec<SupportStatement>> for SupportRecord {
    fn from(statements: Vec<SupportStatement>) -> Self {
        SupportRecord::Alternatives(statements)
    }
}

/// `status.deprecated` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deprecation {
    Flag(bool),
    /// Deprecated, with a human-readable rationale
    Note(String),
}

/// Standardization status of a feature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub standard_track: bool,
}

impl StatusRecord {
    /// Standard, not deprecated
    pub fn current() -> Self {
        Self {
            deprecated: Some(Deprecation::Flag(false)),
            experimental: false,
            standard_track: true,
        }
    }

    /// Deprecated without a note
    pub fn deprecated() -> Self {
        Self {
            deprecated: Some(Deprecation::Flag(true)),
            ..Default::default()
        }
    }

    /// Deprecated with a rationale
    pub fn deprecated_with_note(note: impl Into<String>) -> Self {
        Self {
            deprecated: Some(Deprecation::Note(note.into())),
            ..Default::default()
        }
    }
}

/// The `__compat` block of one feature
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompatStatement {
    /// Dataset runtime key -> support
    #[serde(default)]
    pub support: HashMap<String, SupportRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRecord>,
}

impl CompatStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the support record of one runtime
    pub fn with_support(mut self, runtime: impl Into<String>, record: impl Into<SupportRecord>) -> Self {
        self.support.insert(runtime.into(), record.into());
        self
    }

    pub fn with_status(mut self, status: StatusRecord) -> Self {
        self.status = Some(status);
        self
    }

    /// Support record for a dataset runtime key
    pub fn support_for(&self, runtime: &str) -> Option<&SupportRecord> {
        self.support.get(runtime)
    }
}
