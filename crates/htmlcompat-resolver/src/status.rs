//! Deprecation evaluation of a status record
use htmlcompat_data::{Deprecation, StatusRecord};

use crate::verdict::DeprecationStatus;

/// Reads the `deprecated` flag or note out of a status record
#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecationEvaluator;

impl DeprecationEvaluator {
    /// A missing status, a missing flag and `false` all mean not deprecated
    pub fn evaluate(&self, status: Option<&StatusRecord>) -> DeprecationStatus {
        match status.and_then(|s| s.deprecated.as_ref()) {
            Some(Deprecation::Flag(true)) => DeprecationStatus::deprecated(None),
            Some(Deprecation::Note(note)) => DeprecationStatus::deprecated(Some(note.clone())),
            Some(Deprecation::Flag(false)) | None => DeprecationStatus::not_deprecated(),
        }
    }
}
