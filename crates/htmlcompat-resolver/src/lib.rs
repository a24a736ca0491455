//! HTMLCOMPAT Resolver: Compatibility and Deprecation Verdicts
//!
//! Resolves, for an HTML element or attribute, whether every target runtime
//! supports it and whether it is deprecated.
//!
//! # Architecture
//!
//! ```text
//! (feature, targets) → TargetFilter → CompatibilityResolver → CompatibilityVerdict
//!                                         │  normalize runtime key
//!                                         │  element / attribute / global lookup
//!                                         └─ SupportEvaluator per target
//!
//! feature → DeprecationResolver → DeprecationEvaluator → DeprecationVerdict
//! ```
//!
//! The feature database is an explicit, immutable handle passed into every
//! call. Resolvers hold configuration only.
//!
//! # Example
//!
//! ```
//! use htmlcompat_core::TargetRuntime;
//! use htmlcompat_data::{CompatStatement, FeatureDatabase, StatusRecord, SupportStatement};
//! use htmlcompat_resolver::{CompatibilityResolver, DeprecationResolver, ResolverConfig};
//!
//! let db = FeatureDatabase::builder()
//!     .with_element(
//!         "dialog",
//!         CompatStatement::new()
//!             .with_support("ie", SupportStatement::never())
//!             .with_support("firefox", SupportStatement::since("98")),
//!     )
//!     .with_element("center", CompatStatement::new().with_status(StatusRecord::deprecated()))
//!     .build();
//!
//! let config = ResolverConfig::default();
//! let targets = vec![TargetRuntime::new("ie", "11"), TargetRuntime::new("firefox", "120")];
//!
//! let verdict = CompatibilityResolver::new(&config)
//!     .resolve_element(&db, "dialog", &targets)
//!     .unwrap();
//! assert!(!verdict.is_supported());
//! assert_eq!(verdict.unsupported_target_names(), vec!["ie 11".to_string()]);
//!
//! let deprecation = DeprecationResolver::new(&config)
//!     .resolve_element(&db, "center")
//!     .unwrap();
//! assert!(deprecation.is_deprecated());
//! ```

pub mod compatibility;
pub mod deprecation;
pub mod filter;
mod lookup;
pub mod policy;
pub mod status;
pub mod support;
pub mod verdict;

pub use compatibility::CompatibilityResolver;
pub use deprecation::DeprecationResolver;
pub use filter::TargetFilter;
pub use policy::{MissingDataPolicy, ResolverConfig};
pub use status::DeprecationEvaluator;
pub use support::{statement_supports, SupportEvaluator};
pub use verdict::{CompatibilityVerdict, DeprecationStatus, DeprecationVerdict};

use htmlcompat_core::{CompatError, TargetRuntime};
use htmlcompat_data::FeatureDatabase;

/// Support of an element under the default (fail-open) configuration
pub fn check_element(
    db: &FeatureDatabase,
    element: &str,
    targets: &[TargetRuntime],
) -> Result<CompatibilityVerdict, CompatError> {
    CompatibilityResolver::default().resolve_element(db, element, targets)
}

/// Support of an attribute under the default (fail-open) configuration
pub fn check_attribute(
    db: &FeatureDatabase,
    element: &str,
    attribute: &str,
    targets: &[TargetRuntime],
) -> Result<CompatibilityVerdict, CompatError> {
    CompatibilityResolver::default().resolve_attribute(db, element, attribute, targets)
}

/// Deprecation of an element
pub fn element_deprecation(db: &FeatureDatabase, element: &str) -> Result<DeprecationVerdict, CompatError> {
    DeprecationResolver::default().resolve_element(db, element)
}

/// Deprecation of an attribute on an element
pub fn attribute_deprecation(
    db: &FeatureDatabase,
    element: &str,
    attribute: &str,
) -> Result<DeprecationVerdict, CompatError> {
    DeprecationResolver::default().resolve_attribute(db, element, attribute)
}
