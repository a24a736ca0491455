//! Deprecation resolution
use htmlcompat_core::{CompatError, ReferenceLinkBuilder};
use htmlcompat_data::FeatureDatabase;

use crate::lookup::{self, Lookup, RecordOrigin};
use crate::policy::ResolverConfig;
use crate::status::DeprecationEvaluator;
use crate::verdict::DeprecationVerdict;

/// Answers "is this element/attribute deprecated?"
///
/// Deprecation is a property of the feature, so no target list is involved.
/// Features missing from the database are never deprecated.
#[derive(Debug, Clone, Default)]
pub struct DeprecationResolver {
    evaluator: DeprecationEvaluator,
    links: ReferenceLinkBuilder,
}

impl DeprecationResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            evaluator: DeprecationEvaluator,
            links: config.link_builder(),
        }
    }

    pub fn resolve_element(&self, db: &FeatureDatabase, element: &str) -> Result<DeprecationVerdict, CompatError> {
        let lookup = lookup::element(db, element)?;
        Ok(self.verdict(lookup))
    }

    /// Element-scoped record first, then the global attribute table
    pub fn resolve_attribute(
        &self,
        db: &FeatureDatabase,
        element: &str,
        attribute: &str,
    ) -> Result<DeprecationVerdict, CompatError> {
        let lookup = lookup::attribute(db, element, attribute)?;
        Ok(self.verdict(lookup))
    }

    fn verdict(&self, lookup: Lookup<'_>) -> DeprecationVerdict {
        let status = self
            .evaluator
            .evaluate(lookup.compat.and_then(|c| c.status.as_ref()));
        let reference_url = match lookup.origin {
            RecordOrigin::Missing => None,
            _ => Some(self.links.build_url(&lookup.feature)),
        };

        tracing::debug!(
            feature = %lookup.feature,
            origin = ?lookup.origin,
            deprecated = status.is_deprecated,
            "resolved deprecation"
        );

        DeprecationVerdict::new(lookup.feature, status, reference_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlcompat_core::FeatureKind;
    use htmlcompat_data::{CompatStatement, StatusRecord};

    fn db() -> FeatureDatabase {
        FeatureDatabase::builder()
            .with_element("center", CompatStatement::new().with_status(StatusRecord::deprecated()))
            .with_element(
                "nobr",
                CompatStatement::new().with_status(StatusRecord::deprecated_with_note("Use CSS")),
            )
            .with_element("img", CompatStatement::new().with_status(StatusRecord::current()))
            .with_element_attribute(
                "img",
                "align",
                CompatStatement::new().with_status(StatusRecord::deprecated()),
            )
            .with_global_attribute("align", CompatStatement::new().with_status(StatusRecord::current()))
            .with_global_attribute(
                "xml:lang",
                CompatStatement::new().with_status(StatusRecord::deprecated()),
            )
            .build()
    }

    #[test]
    fn test_deprecated_element() {
        let verdict = DeprecationResolver::default().resolve_element(&db(), "center").unwrap();
        assert!(verdict.is_deprecated());
        assert_eq!(verdict.note(), None);
        assert!(verdict.reference_url().is_some());
    }

    #[test]
    fn test_deprecated_element_with_note() {
        let verdict = DeprecationResolver::default().resolve_element(&db(), "NOBR").unwrap();
        assert!(verdict.is_deprecated());
        assert_eq!(verdict.note(), Some("Use CSS"));
    }

    #[test]
    fn test_element_scoped_attribute_wins_over_global() {
        let verdict = DeprecationResolver::default()
            .resolve_attribute(&db(), "img", "align")
            .unwrap();
        assert!(verdict.is_deprecated());
        assert_eq!(verdict.feature().kind(), FeatureKind::ElementAttribute);
    }

    #[test]
    fn test_global_fallback() {
        let resolver = DeprecationResolver::default();
        let verdict = resolver.resolve_attribute(&db(), "p", "xml:lang").unwrap();
        assert!(verdict.is_deprecated());
        assert_eq!(verdict.feature().kind(), FeatureKind::GlobalAttribute);

        let verdict = resolver.resolve_attribute(&db(), "p", "align").unwrap();
        assert!(!verdict.is_deprecated());
    }

    #[test]
    fn test_missing_feature_is_not_deprecated() {
        let resolver = DeprecationResolver::new(&ResolverConfig::fail_closed());
        let verdict = resolver.resolve_element(&db(), "my-widget").unwrap();
        assert!(!verdict.is_deprecated());
        assert_eq!(verdict.reference_url(), None);

        let verdict = resolver.resolve_attribute(&db(), "my-widget", "data-x").unwrap();
        assert!(!verdict.is_deprecated());
    }

    #[test]
    fn test_blank_element_rejected() {
        let err = DeprecationResolver::default().resolve_element(&db(), "").unwrap_err();
        assert!(matches!(err, CompatError::InvalidFeatureKey(_)));
    }
}
