//! Documentation links for features
use crate::data_model::{FeatureKey, FeatureKind};

/// Default documentation root
pub const DEFAULT_REFERENCE_BASE_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/";

/// Builds reference URLs under a configurable documentation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLinkBuilder {
    base_url: String,
}

impl ReferenceLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the page documenting `feature`
    pub fn build_url(&self, feature: &FeatureKey) -> String {
        let element = feature.element().unwrap_or_default();
        let attribute = feature.attribute().unwrap_or_default();

        match feature.kind() {
            FeatureKind::Element => format!("{}HTML/Element/{}", self.base_url, element),
            FeatureKind::ElementAttribute => {
                format!("{}HTML/Element/{}#{}", self.base_url, element, attribute)
            }
            FeatureKind::GlobalAttribute => {
                format!("{}HTML/Global_attributes/{}", self.base_url, attribute)
            }
        }
    }
}

impl Default for ReferenceLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_BASE_URL)
    }
}

/// Build a reference URL under the default documentation root
pub fn build_reference_url(feature: &FeatureKey) -> String {
    ReferenceLinkBuilder::default().build_url(feature)
}
