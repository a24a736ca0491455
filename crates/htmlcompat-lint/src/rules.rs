//! Lint rules
//!
//! `HtmlCompatRule` reports elements and attributes unsupported by the
//! configured targets, plus deprecated ones. `HtmlDeprecatedRule` reports
//! deprecations only and needs no targets.

use htmlcompat_core::{CompatError, TargetRuntime};
use htmlcompat_data::FeatureDatabase;
use htmlcompat_resolver::{CompatibilityResolver, CompatibilityVerdict, DeprecationResolver, DeprecationVerdict};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::adapter::{adapter_for, ElementNode, NodeAdapter};
use crate::messages::{note_suffix, MessageId, MessageRenderer};
use crate::options::LintOptions;

/// What a diagnostic points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Subject {
    Element { element: String },
    Attribute { element: String, attribute: String },
}

/// A reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message_id: MessageId,
    pub subject: Subject,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

/// Deprecation checks shared by both rules
#[derive(Debug)]
struct DeprecationCheck<'db> {
    db: &'db FeatureDatabase,
    resolver: DeprecationResolver,
    messages: MessageRenderer,
    options: LintOptions,
}

impl<'db> DeprecationCheck<'db> {
    fn new(db: &'db FeatureDatabase, options: &LintOptions) -> Result<Self, CompatError> {
        Ok(Self {
            db,
            resolver: DeprecationResolver::new(&options.resolver),
            messages: MessageRenderer::new()?,
            options: options.clone(),
        })
    }

    fn element(&self, element: &str) -> Result<Option<Diagnostic>, CompatError> {
        let verdict = self.resolver.resolve_element(self.db, element)?;
        if !verdict.is_deprecated() {
            return Ok(None);
        }
        let data = json!({
            "element": element,
            "note": note_suffix(verdict.note()),
            "url": verdict.reference_url(),
        });
        self.diagnostic(MessageId::DeprecatedElement, element_subject(element), &data, &verdict)
            .map(Some)
    }

    fn attribute(&self, element: &str, attribute: &str) -> Result<Option<Diagnostic>, CompatError> {
        let verdict = self.resolver.resolve_attribute(self.db, element, attribute)?;
        if !verdict.is_deprecated() {
            return Ok(None);
        }
        let data = json!({
            "element": element,
            "attribute": attribute,
            "note": note_suffix(verdict.note()),
            "url": verdict.reference_url(),
        });
        self.diagnostic(
            MessageId::DeprecatedAttribute,
            attribute_subject(element, attribute),
            &data,
            &verdict,
        )
        .map(Some)
    }

    fn diagnostic(
        &self,
        id: MessageId,
        subject: Subject,
        data: &Value,
        verdict: &DeprecationVerdict,
    ) -> Result<Diagnostic, CompatError> {
        Ok(Diagnostic {
            message_id: id,
            subject,
            message: self.messages.render(id, data)?,
            reference_url: verdict.reference_url().map(str::to_string),
        })
    }

    /// Attributes of `node` that are checked, in node order
    fn checked_attributes<'n>(&self, node: &'n ElementNode) -> Vec<&'n str> {
        node.attributes
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| !self.options.skips_attribute(name))
            .collect()
    }
}

/// Reports unsupported and deprecated elements and attributes
#[derive(Debug)]
pub struct HtmlCompatRule<'db> {
    deprecation: DeprecationCheck<'db>,
    resolver: CompatibilityResolver,
    targets: Vec<TargetRuntime>,
}

impl<'db> HtmlCompatRule<'db> {
    pub const NAME: &'static str = "html-compat";

    pub fn new(db: &'db FeatureDatabase, options: &LintOptions) -> Result<Self, CompatError> {
        let targets = options.resolve_targets()?;
        tracing::debug!(targets = targets.len(), "html-compat rule configured");
        Ok(Self {
            deprecation: DeprecationCheck::new(db, options)?,
            resolver: CompatibilityResolver::new(&options.resolver),
            targets,
        })
    }

    /// Effective targets, after the ignore list
    pub fn targets(&self) -> &[TargetRuntime] {
        &self.targets
    }

    /// Diagnostics for one element: element support, element deprecation,
    /// then support and deprecation of each attribute
    pub fn check(&self, node: &ElementNode) -> Result<Vec<Diagnostic>, CompatError> {
        let db = self.deprecation.db;
        let element = node.element_name.as_str();
        let mut diagnostics = Vec::new();

        let verdict = self.resolver.resolve_element(db, element, &self.targets)?;
        if !verdict.is_supported() {
            let data = json!({
                "element": element,
                "browsers": browsers(&verdict),
                "url": verdict.reference_url(),
            });
            diagnostics.push(self.diagnostic(
                MessageId::IncompatibleElement,
                element_subject(element),
                &data,
                &verdict,
            )?);
        }
        diagnostics.extend(self.deprecation.element(element)?);

        for attribute in self.deprecation.checked_attributes(node) {
            let verdict = self
                .resolver
                .resolve_attribute(db, element, attribute, &self.targets)?;
            if !verdict.is_supported() {
                let data = json!({
                    "element": element,
                    "attribute": attribute,
                    "browsers": browsers(&verdict),
                    "url": verdict.reference_url(),
                });
                diagnostics.push(self.diagnostic(
                    MessageId::IncompatibleAttribute,
                    attribute_subject(element, attribute),
                    &data,
                    &verdict,
                )?);
            }
            diagnostics.extend(self.deprecation.attribute(element, attribute)?);
        }

        Ok(diagnostics)
    }

    /// Check a syntax tree node through `adapter`; non-element nodes yield nothing
    pub fn check_with<A: NodeAdapter + ?Sized>(&self, adapter: &A, node: &Value) -> Result<Vec<Diagnostic>, CompatError> {
        match adapter.extract(node) {
            Some(element) => self.check(&element),
            None => Ok(Vec::new()),
        }
    }

    /// Check every element node of a tree, in document order
    pub fn check_tree(&self, root: &Value) -> Result<Vec<Diagnostic>, CompatError> {
        let mut diagnostics = Vec::new();
        visit_elements(root, &mut |element| {
            diagnostics.extend(self.check(element)?);
            Ok(())
        })?;
        Ok(diagnostics)
    }

    fn diagnostic(
        &self,
        id: MessageId,
        subject: Subject,
        data: &Value,
        verdict: &CompatibilityVerdict,
    ) -> Result<Diagnostic, CompatError> {
        Ok(Diagnostic {
            message_id: id,
            subject,
            message: self.deprecation.messages.render(id, data)?,
            reference_url: verdict.reference_url().map(str::to_string),
        })
    }
}

/// Reports deprecated elements and attributes
#[derive(Debug)]
pub struct HtmlDeprecatedRule<'db> {
    deprecation: DeprecationCheck<'db>,
}

impl<'db> HtmlDeprecatedRule<'db> {
    pub const NAME: &'static str = "html-deprecated";

    pub fn new(db: &'db FeatureDatabase, options: &LintOptions) -> Result<Self, CompatError> {
        Ok(Self {
            deprecation: DeprecationCheck::new(db, options)?,
        })
    }

    pub fn check(&self, node: &ElementNode) -> Result<Vec<Diagnostic>, CompatError> {
        let element = node.element_name.as_str();
        let mut diagnostics: Vec<Diagnostic> = self.deprecation.element(element)?.into_iter().collect();
        for attribute in self.deprecation.checked_attributes(node) {
            diagnostics.extend(self.deprecation.attribute(element, attribute)?);
        }
        Ok(diagnostics)
    }

    pub fn check_with<A: NodeAdapter + ?Sized>(&self, adapter: &A, node: &Value) -> Result<Vec<Diagnostic>, CompatError> {
        match adapter.extract(node) {
            Some(element) => self.check(&element),
            None => Ok(Vec::new()),
        }
    }

    pub fn check_tree(&self, root: &Value) -> Result<Vec<Diagnostic>, CompatError> {
        let mut diagnostics = Vec::new();
        visit_elements(root, &mut |element| {
            diagnostics.extend(self.check(element)?);
            Ok(())
        })?;
        Ok(diagnostics)
    }
}

/// Depth-first walk calling `visit` for every node an adapter recognizes as
/// an element, including elements nested in expressions and attribute values
fn visit_elements<F>(node: &Value, visit: &mut F) -> Result<(), CompatError>
where
    F: FnMut(&ElementNode) -> Result<(), CompatError>,
{
    match node {
        Value::Array(nodes) => {
            for child in nodes {
                visit_elements(child, visit)?;
            }
        }
        Value::Object(fields) => {
            if let Some(element) = adapter_for(node).and_then(|adapter| adapter.extract(node)) {
                visit(&element)?;
            }
            visit_fields(fields, visit)?;
        }
        _ => {}
    }
    Ok(())
}

/// Opening element first, `children` last. The opening element of a
/// `JSXElement` is the same element, so only its fields are walked.
fn visit_fields<F>(fields: &Map<String, Value>, visit: &mut F) -> Result<(), CompatError>
where
    F: FnMut(&ElementNode) -> Result<(), CompatError>,
{
    if let Some(Value::Object(opening)) = fields.get("openingElement") {
        visit_fields(opening, visit)?;
    }
    for (key, value) in fields {
        if matches!(key.as_str(), "openingElement" | "children" | "parent") {
            continue;
        }
        visit_elements(value, visit)?;
    }
    if let Some(children) = fields.get("children") {
        visit_elements(children, visit)?;
    }
    Ok(())
}

fn browsers(verdict: &CompatibilityVerdict) -> String {
    verdict.unsupported_target_names().join(", ")
}

fn element_subject(element: &str) -> Subject {
    Subject::Element {
        element: element.to_string(),
    }
}

fn attribute_subject(element: &str, attribute: &str) -> Subject {
    Subject::Attribute {
        element: element.to_string(),
        attribute: attribute.to_string(),
    }
}
