//! Diagnostic message templates
//!
//! Messages are Handlebars templates rendered without HTML escaping; they
//! end up in terminal and editor output, not in markup.

use handlebars::Handlebars;
use htmlcompat_core::CompatError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of diagnostic a rule reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    IncompatibleElement,
    IncompatibleAttribute,
    DeprecatedElement,
    DeprecatedAttribute,
}

impl MessageId {
    pub const ALL: [MessageId; 4] = [
        MessageId::IncompatibleElement,
        MessageId::IncompatibleAttribute,
        MessageId::DeprecatedElement,
        MessageId::DeprecatedAttribute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageId::IncompatibleElement => "incompatibleElement",
            MessageId::IncompatibleAttribute => "incompatibleAttribute",
            MessageId::DeprecatedElement => "deprecatedElement",
            MessageId::DeprecatedAttribute => "deprecatedAttribute",
        }
    }

    /// Template source for this message
    pub fn template(&self) -> &'static str {
        match self {
            MessageId::IncompatibleElement => {
                "HTML element \"{{element}}\" is not supported in: {{browsers}}.{{#if url}} See {{url}} for details.{{/if}}"
            }
            MessageId::IncompatibleAttribute => {
                "HTML attribute \"{{attribute}}\" on element \"{{element}}\" is not supported in: {{browsers}}.{{#if url}} See {{url}} for details.{{/if}}"
            }
            MessageId::DeprecatedElement => {
                "HTML element \"{{element}}\" is deprecated{{note}}.{{#if url}} See {{url}} for details.{{/if}}"
            }
            MessageId::DeprecatedAttribute => {
                "HTML attribute \"{{attribute}}\" on element \"{{element}}\" is deprecated{{note}}.{{#if url}} See {{url}} for details.{{/if}}"
            }
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders diagnostic messages from the registered templates
pub struct MessageRenderer {
    handlebars: Handlebars<'static>,
}

impl MessageRenderer {
    pub fn new() -> Result<Self, CompatError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        for id in MessageId::ALL {
            handlebars
                .register_template_string(id.as_str(), id.template())
                .map_err(|e| CompatError::Template(format!("{}: {}", id, e)))?;
        }

        Ok(Self { handlebars })
    }

    /// Render the message for `id` with `data`
    pub fn render(&self, id: MessageId, data: &Value) -> Result<String, CompatError> {
        self.handlebars
            .render(id.as_str(), data)
            .map_err(|e| CompatError::Template(format!("{}: {}", id, e)))
    }
}

impl fmt::Debug for MessageRenderer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MessageRenderer").finish_non_exhaustive()
    }
}

/// `": <note>"`, or empty without a note. Trailing periods are dropped;
/// the templates end the sentence themselves.
pub(crate) fn note_suffix(note: Option<&str>) -> String {
    match note.map(|n| n.trim().trim_end_matches('.').trim_end()) {
        Some(n) if !n.is_empty() => format!(": {}", n),
        _ => String::new(),
    }
}
