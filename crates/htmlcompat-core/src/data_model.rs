//! Data Model: TargetRuntime, FeatureKey
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompatError;

/// One entry of a resolved target list, in the target provider's vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRuntime {
    /// Runtime identifier (ex: "ie", "and_chr", "ios_saf")
    pub runtime: String,
    /// Dotted numeric version (ex: "11", "15.2")
    pub version: String,
}

impl TargetRuntime {
    pub fn new(runtime: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for TargetRuntime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.runtime, self.version)
    }
}

/// Parses the provider's `"runtime version"` form.
///
/// A ranged version such as `"15.2-15.3"` keeps its lower bound.
impl FromStr for TargetRuntime {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (runtime, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(runtime), Some(version), None) => (runtime, version),
            _ => {
                return Err(CompatError::InvalidTarget(format!(
                    "expected \"<runtime> <version>\", got {:?}",
                    s
                )))
            }
        };

        let version = version.split('-').next().unwrap_or(version);
        if version.is_empty() {
            return Err(CompatError::InvalidTarget(format!("missing version in {:?}", s)));
        }

        Ok(Self::new(runtime, version))
    }
}

/// Which table of the feature database a key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Element,
    GlobalAttribute,
    ElementAttribute,
}

/// Lower-cased identifier of an element, a global attribute, or an
/// attribute scoped to one element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureKey")]
pub struct FeatureKey {
    kind: FeatureKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
}

impl FeatureKey {
    /// Key for an element (ex: `dialog`)
    pub fn for_element(element: &str) -> Result<Self, CompatError> {
        Ok(Self {
            kind: FeatureKind::Element,
            element: Some(clean_identifier(element, "element")?),
            attribute: None,
        })
    }

    /// Key for an attribute valid on every element (ex: `hidden`)
    pub fn for_global_attribute(attribute: &str) -> Result<Self, CompatError> {
        Ok(Self {
            kind: FeatureKind::GlobalAttribute,
            element: None,
            attribute: Some(clean_identifier(attribute, "attribute")?),
        })
    }

    /// Key for an attribute on a specific element (ex: `img` + `align`)
    pub fn for_element_attribute(element: &str, attribute: &str) -> Result<Self, CompatError> {
        Ok(Self {
            kind: FeatureKind::ElementAttribute,
            element: Some(clean_identifier(element, "element")?),
            attribute: Some(clean_identifier(attribute, "attribute")?),
        })
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Dotted path in the compatibility dataset (ex: `html.elements.img.align`)
    pub fn path(&self) -> String {
        match self.kind {
            FeatureKind::Element => format!("html.elements.{}", self.element_or_empty()),
            FeatureKind::ElementAttribute => format!(
                "html.elements.{}.{}",
                self.element_or_empty(),
                self.attribute_or_empty()
            ),
            FeatureKind::GlobalAttribute => {
                format!("html.global_attributes.{}", self.attribute_or_empty())
            }
        }
    }

    fn element_or_empty(&self) -> &str {
        self.element.as_deref().unwrap_or("")
    }

    fn attribute_or_empty(&self) -> &str {
        self.attribute.as_deref().unwrap_or("")
    }
}

/// Unvalidated wire form of `FeatureKey`
#[derive(Deserialize)]
struct RawFeatureKey {
    kind: FeatureKind,
    #[serde(default)]
    element: Option<String>,
    #[serde(default)]
    attribute: Option<String>,
}

impl TryFrom<RawFeatureKey> for FeatureKey {
    type Error = CompatError;

    fn try_from(raw: RawFeatureKey) -> Result<Self, Self::Error> {
        let element = raw.element.as_deref();
        let attribute = raw.attribute.as_deref();
        match (raw.kind, element, attribute) {
            (FeatureKind::Element, Some(element), None) => Self::for_element(element),
            (FeatureKind::GlobalAttribute, None, Some(attribute)) => Self::for_global_attribute(attribute),
            (FeatureKind::ElementAttribute, Some(element), Some(attribute)) => {
                Self::for_element_attribute(element, attribute)
            }
            (kind, _, _) => Err(CompatError::InvalidFeatureKey(format!(
                "fields do not match kind {:?}",
                kind
            ))),
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn clean_identifier(raw: &str, what: &str) -> Result<String, CompatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CompatError::InvalidFeatureKey(format!("{} name is empty", what)));
    }
    Ok(trimmed.to_ascii_lowercase())
}
