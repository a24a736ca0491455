//! Compatibility resolution across a target list
use htmlcompat_core::{normalize_runtime_key, CompatError, ReferenceLinkBuilder, TargetRuntime};
use htmlcompat_data::{CompatStatement, FeatureDatabase};

use crate::lookup::{self, Lookup, RecordOrigin};
use crate::policy::ResolverConfig;
use crate::support::SupportEvaluator;
use crate::verdict::CompatibilityVerdict;

/// Answers "is this element/attribute supported by every target?"
///
/// Holds only configuration; the database is passed into each call.
#[derive(Debug, Clone)]
pub struct CompatibilityResolver {
    evaluator: SupportEvaluator,
    links: ReferenceLinkBuilder,
}

impl CompatibilityResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            evaluator: SupportEvaluator::new(config.missing_data),
            links: config.link_builder(),
        }
    }

    /// Support of `element` across `targets`
    pub fn resolve_element(
        &self,
        db: &FeatureDatabase,
        element: &str,
        targets: &[TargetRuntime],
    ) -> Result<CompatibilityVerdict, CompatError> {
        let lookup = lookup::element(db, element)?;
        Ok(self.verdict(lookup, targets))
    }

    /// Support of `attribute` on `element` across `targets`, falling back to
    /// the global attribute table when the element has no record for it
    pub fn resolve_attribute(
        &self,
        db: &FeatureDatabase,
        element: &str,
        attribute: &str,
        targets: &[TargetRuntime],
    ) -> Result<CompatibilityVerdict, CompatError> {
        let lookup = lookup::attribute(db, element, attribute)?;
        Ok(self.verdict(lookup, targets))
    }

    fn verdict(&self, lookup: Lookup<'_>, targets: &[TargetRuntime]) -> CompatibilityVerdict {
        let unsupported = self.unsupported_targets(lookup.compat, targets);
        let reference_url = match lookup.origin {
            RecordOrigin::Missing => None,
            _ => Some(self.links.build_url(&lookup.feature)),
        };

        tracing::debug!(
            feature = %lookup.feature,
            origin = ?lookup.origin,
            targets = targets.len(),
            unsupported = unsupported.len(),
            "resolved compatibility"
        );

        CompatibilityVerdict::new(lookup.feature, unsupported, reference_url)
    }

    fn unsupported_targets(
        &self,
        compat: Option<&CompatStatement>,
        targets: &[TargetRuntime],
    ) -> Vec<TargetRuntime> {
        targets
            .iter()
            .filter(|target| {
                let runtime = normalize_runtime_key(&target.runtime);
                let record = compat.and_then(|c| c.support_for(runtime));
                let supported = self.evaluator.is_supported(record, &target.version);
                tracing::trace!(
                    runtime = %target.runtime,
                    dataset_runtime = runtime,
                    version = %target.version,
                    has_record = record.is_some(),
                    supported,
                    "evaluated target"
                );
                !supported
            })
            .cloned()
            .collect()
    }
}

impl Default for CompatibilityResolver {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}
