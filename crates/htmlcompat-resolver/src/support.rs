//! Support evaluation for a single runtime
use htmlcompat_core::compare_versions;
use htmlcompat_data::{SupportRecord, SupportStatement, VersionAdded};
use std::cmp::Ordering;

use crate::policy::MissingDataPolicy;

/// Decides whether a runtime's support record covers a target version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupportEvaluator {
    missing_data: MissingDataPolicy,
}

impl SupportEvaluator {
    pub fn new(missing_data: MissingDataPolicy) -> Self {
        Self { missing_data }
    }

    pub fn missing_data(&self) -> MissingDataPolicy {
        self.missing_data
    }

    /// Whether `record` supports `target_version`.
    ///
    /// An absent record is decided by the missing-data policy. For a list of
    /// alternatives, any supporting statement suffices.
    pub fn is_supported(&self, record: Option<&SupportRecord>, target_version: &str) -> bool {
        match record {
            None => self.missing_data.assumes_supported(),
            Some(record) => record
                .statements()
                .iter()
                .any(|statement| statement_supports(statement, target_version)),
        }
    }
}

/// Whether one support statement covers `target_version`
pub fn statement_supports(statement: &SupportStatement, target_version: &str) -> bool {
    match &statement.version_added {
        Some(VersionAdded::Flag(flag)) => *flag,
        None => false,
        // A digitless value such as "preview" parses as version 0.
        Some(VersionAdded::Version(introduced)) => {
            compare_versions(target_version, introduced) != Ordering::Less
        }
    }
}
