//! HTMLCOMPAT Lint: Compatibility Rules for Markup Syntax Trees
//!
//! Two rules built on the resolver:
//!
//! - `HtmlCompatRule` (`html-compat`): elements and attributes unsupported by
//!   the configured targets, plus deprecated ones
//! - `HtmlDeprecatedRule` (`html-deprecated`): deprecated elements and
//!   attributes only
//!
//! Syntax tree nodes are plain JSON values. A `NodeAdapter` reduces a JSX or
//! HTML parser node to an `ElementNode` before the rules look at it.
//!
//! # Example
//!
//! ```
//! use htmlcompat_data::{CompatStatement, FeatureDatabase, SupportStatement};
//! use htmlcompat_lint::{HtmlCompatRule, LintOptions, MessageId};
//! use serde_json::json;
//!
//! let db = FeatureDatabase::builder()
//!     .with_element("dialog", CompatStatement::new().with_support("ie", SupportStatement::never()))
//!     .build();
//!
//! let rule = HtmlCompatRule::new(&db, &LintOptions::for_targets(["ie 11"])).unwrap();
//! let node = json!({
//!     "type": "JSXElement",
//!     "openingElement": { "name": { "name": "dialog" }, "attributes": [] }
//! });
//!
//! let diagnostics = rule.check_tree(&node).unwrap();
//! assert_eq!(diagnostics[0].message_id, MessageId::IncompatibleElement);
//! ```

pub mod adapter;
pub mod messages;
pub mod options;
pub mod rules;

pub use adapter::{adapter_for, ElementNode, HtmlAdapter, JsxAdapter, NodeAdapter};
pub use messages::{MessageId, MessageRenderer};
pub use options::{LintOptions, TargetSpec, JSX_ONLY_ATTRIBUTES};
pub use rules::{Diagnostic, HtmlCompatRule, HtmlDeprecatedRule, Subject};
