//! Syntax tree node adapters
//!
//! Each markup dialect shapes its element nodes differently. An adapter
//! reduces one node to an `ElementNode`: a lower-cased element name and its
//! attributes. Nodes that are not plain HTML elements yield `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Element name and attributes extracted from a syntax tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    pub element_name: String,
    /// `(name, literal value)` pairs, names lower-cased
    pub attributes: Vec<(String, Option<String>)>,
}

impl ElementNode {
    pub fn new(element_name: impl Into<String>) -> Self {
        Self {
            element_name: element_name.into().to_ascii_lowercase(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.attributes
            .push((name.into().to_ascii_lowercase(), value.map(str::to_string)));
        self
    }
}

/// Extracts an `ElementNode` from a node of one tree dialect
pub trait NodeAdapter {
    fn extract(&self, node: &Value) -> Option<ElementNode>;
}

/// JSX element nodes (`JSXElement` / `JSXOpeningElement`)
///
/// Capitalized names are components, not HTML elements, and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsxAdapter;

impl NodeAdapter for JsxAdapter {
    fn extract(&self, node: &Value) -> Option<ElementNode> {
        let opening = node.get("openingElement");
        let name = opening
            .and_then(|o| o.pointer("/name/name"))
            .or_else(|| node.pointer("/name/name"))
            .and_then(Value::as_str)?;

        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return None;
        }

        let attributes = opening
            .and_then(|o| o.get("attributes"))
            .or_else(|| node.get("attributes"))
            .and_then(Value::as_array);

        let mut element = ElementNode::new(name);
        for attr in attributes.into_iter().flatten() {
            if attr.get("type").and_then(Value::as_str) != Some("JSXAttribute") {
                continue;
            }
            let Some(attr_name) = attr.pointer("/name/name").and_then(Value::as_str) else {
                continue;
            };
            if attr_name.is_empty() {
                continue;
            }
            let value = attr.pointer("/value/value").and_then(Value::as_str);
            element = element.with_attribute(attr_name, value);
        }
        Some(element)
    }
}

/// HTML parser element nodes (`HTMLElement` / `Element`) with a `tagName`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAdapter;

impl NodeAdapter for HtmlAdapter {
    fn extract(&self, node: &Value) -> Option<ElementNode> {
        let tag = node.get("tagName").and_then(Value::as_str)?;
        if tag.is_empty() {
            return None;
        }

        let mut element = ElementNode::new(tag);
        let attributes = node.get("attributes").and_then(Value::as_array);
        for attr in attributes.into_iter().flatten() {
            let name = attr
                .pointer("/key/name")
                .or_else(|| attr.get("name"))
                .and_then(Value::as_str)
                .filter(|n| !n.is_empty());
            let Some(name) = name else {
                continue;
            };
            let value = attr
                .get("value")
                .and_then(|v| v.as_str().or_else(|| v.get("value").and_then(Value::as_str)));
            element = element.with_attribute(name, value);
        }
        Some(element)
    }
}

/// Adapter for a node, chosen by its `type` field
pub fn adapter_for(node: &Value) -> Option<&'static dyn NodeAdapter> {
    match node.get("type").and_then(Value::as_str)? {
        "JSXElement" | "JSXOpeningElement" => Some(&JsxAdapter),
        "HTMLElement" | "Element" => Some(&HtmlAdapter),
        _ => None,
    }
}
