//! Feature Database: element, element attribute and global attribute tables
use htmlcompat_core::CompatError;
use serde::Deserialize;
use std::collections::HashMap;

use crate::records::CompatStatement;

/// Dataset entry of one element: its own `__compat` block plus one entry per
/// element-scoped attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ElementEntry {
    #[serde(rename = "__compat", default)]
    compat: Option<CompatStatement>,
    #[serde(flatten)]
    attributes: HashMap<String, AttributeEntry>,
}

/// Dataset entry of one attribute. Nested sub-features are not modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct AttributeEntry {
    #[serde(rename = "__compat", default)]
    compat: Option<CompatStatement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HtmlSection {
    #[serde(default)]
    elements: HashMap<String, ElementEntry>,
    #[serde(default)]
    global_attributes: HashMap<String, AttributeEntry>,
}

/// Top-level dataset document. Sections other than `html` are skipped.
#[derive(Debug, Clone, Deserialize)]
struct DatasetDocument {
    html: HtmlSection,
}

/// Immutable feature support database
///
/// Loaded once and passed by reference into every resolver call; it is
/// never mutated after construction, so it can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FeatureDatabase {
    elements: HashMap<String, ElementEntry>,
    global_attributes: HashMap<String, AttributeEntry>,
}

impl FeatureDatabase {
    /// An empty database (every lookup misses)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> FeatureDatabaseBuilder {
        FeatureDatabaseBuilder::default()
    }

    /// Parse a compatibility dataset document
    pub fn from_json(json: &str) -> Result<Self, CompatError> {
        let document: DatasetDocument = serde_json::from_str(json)
            .map_err(|e| CompatError::Database(format!("Failed to parse dataset: {}", e)))?;
        Ok(Self::from_document(document))
    }

    /// Build from an already parsed dataset document
    pub fn from_value(value: serde_json::Value) -> Result<Self, CompatError> {
        let document: DatasetDocument = serde_json::from_value(value)
            .map_err(|e| CompatError::Database(format!("Failed to parse dataset: {}", e)))?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: DatasetDocument) -> Self {
        let db = Self {
            elements: document.html.elements,
            global_attributes: document.html.global_attributes,
        };
        tracing::info!(
            elements = db.element_count(),
            global_attributes = db.global_attribute_count(),
            "feature database loaded"
        );
        db
    }

    /// `__compat` block of an element
    pub fn element(&self, element: &str) -> Option<&CompatStatement> {
        self.elements.get(element)?.compat.as_ref()
    }

    /// `__compat` block of an attribute scoped to `element`
    pub fn element_attribute(&self, element: &str, attribute: &str) -> Option<&CompatStatement> {
        self.elements
            .get(element)?
            .attributes
            .get(attribute)?
            .compat
            .as_ref()
    }

    /// `__compat` block of a global attribute
    pub fn global_attribute(&self, attribute: &str) -> Option<&CompatStatement> {
        self.global_attributes.get(attribute)?.compat.as_ref()
    }

    /// Whether the dataset has any entry for `element`, with or without data
    pub fn contains_element(&self, element: &str) -> bool {
        self.elements.contains_key(element)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn global_attribute_count(&self) -> usize {
        self.global_attributes.len()
    }
}

/// Builds synthetic in-memory databases
#[derive(Debug, Default)]
pub struct FeatureDatabaseBuilder {
    elements: HashMap<String, ElementEntry>,
    global_attributes: HashMap<String, AttributeEntry>,
}

impl FeatureDatabaseBuilder {
    /// Set the `__compat` block of an element
    pub fn with_element(mut self, element: impl Into<String>, compat: CompatStatement) -> Self {
        self.elements.entry(element.into()).or_default().compat = Some(compat);
        self
    }

    /// Add an element entry that has no data of its own
    pub fn with_bare_element(mut self, element: impl Into<String>) -> Self {
        self.elements.entry(element.into()).or_default();
        self
    }

    /// Set the `__compat` block of an element-scoped attribute
    pub fn with_element_attribute(
        mut self,
        element: impl Into<String>,
        attribute: impl Into<String>,
        compat: CompatStatement,
    ) -> Self {
        self.elements
            .entry(element.into())
            .or_default()
            .attributes
            .insert(attribute.into(), AttributeEntry { compat: Some(compat) });
        self
    }

    /// Set the `__compat` block of a global attribute
    pub fn with_global_attribute(mut self, attribute: impl Into<String>, compat: CompatStatement) -> Self {
        self.global_attributes
            .insert(attribute.into(), AttributeEntry { compat: Some(compat) });
        self
    }

    pub fn build(self) -> FeatureDatabase {
        FeatureDatabase {
            elements: self.elements,
            global_attributes: self.global_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{StatusRecord, SupportStatement};
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "__meta": { "version": "5.5.0" },
            "css": { "properties": {} },
            "html": {
                "elements": {
                    "img": {
                        "__compat": {
                            "support": { "chrome": { "version_added": "1" } },
                            "status": { "deprecated": false }
                        },
                        "align": {
                            "__compat": {
                                "support": { "chrome": { "version_added": "1" } },
                                "status": { "deprecated": true }
                            }
                        }
                    },
                    "portal": {
                        "src": {
                            "__compat": { "support": { "chrome": { "version_added": "85" } } }
                        }
                    }
                },
                "global_attributes": {
                    "hidden": {
                        "__compat": { "support": { "ie": { "version_added": "11" } } }
                    }
                }
            }
        })
    }

    #[test]
    fn test_lookup_from_document() {
        let db = FeatureDatabase::from_value(sample()).unwrap();
        assert_eq!(db.element_count(), 2);
        assert_eq!(db.global_attribute_count(), 1);

        assert!(db.element("img").is_some());
        assert!(db.element_attribute("img", "align").is_some());
        assert!(db.element_attribute("img", "srcset").is_none());
        assert!(db.global_attribute("hidden").is_some());
        assert!(db.global_attribute("align").is_none());
    }

    #[test]
    fn test_element_without_own_data() {
        let db = FeatureDatabase::from_value(sample()).unwrap();
        assert!(db.contains_element("portal"));
        assert!(db.element("portal").is_none());
        assert!(db.element_attribute("portal", "src").is_some());
    }

    #[test]
    fn test_from_json_error() {
        let err = FeatureDatabase::from_json("{ \"css\": {} }").unwrap_err();
        assert!(matches!(err, CompatError::Database(_)));
        assert!(FeatureDatabase::from_json("not json").is_err());
    }

    #[test]
    fn test_builder() {
        let db = FeatureDatabase::builder()
            .with_element("center", CompatStatement::new().with_status(StatusRecord::deprecated()))
            .with_element_attribute(
                "table",
                "bgcolor",
                CompatStatement::new().with_status(StatusRecord::deprecated()),
            )
            .with_global_attribute(
                "id",
                CompatStatement::new().with_support("ie", SupportStatement::always()),
            )
            .with_bare_element("div")
            .build();

        assert!(db.element("center").is_some());
        assert!(db.element("table").is_none());
        assert!(db.element_attribute("table", "bgcolor").is_some());
        assert!(db.contains_element("div"));
        assert!(db.global_attribute("id").is_some());
    }
}
