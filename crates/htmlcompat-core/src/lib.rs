//! HTMLCOMPAT Core: feature identifiers, targets, and version ordering
//!
//! Shared building blocks for the compatibility and deprecation resolvers:
//! the `FeatureKey`/`TargetRuntime` value types, the runtime key alias table,
//! the dotted version comparator and the documentation link builder.

pub mod data_model;
pub mod error;
pub mod reference;
pub mod runtime;
pub mod version;

pub use data_model::{FeatureKey, FeatureKind, TargetRuntime};
pub use error::CompatError;
pub use reference::{build_reference_url, ReferenceLinkBuilder, DEFAULT_REFERENCE_BASE_URL};
pub use runtime::normalize_runtime_key;
pub use version::{compare_versions, Version};

/// Engine version
pub const HTMLCOMPAT_VERSION: &str = "1.0.0";
