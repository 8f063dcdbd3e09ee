//! Message content tables and the interpolation engine.
//!
//! A [`MessageTable`] maps rule names to template strings with positional
//! `%1`, `%2`, … placeholders. [`render`] substitutes arguments into a
//! template, falling back to a generic message when no template exists.
//! Localized tables are plain `name: template` maps, so hosts can load
//! them from JSON or TOML via serde.

mod en_us;

pub use en_us::en_us;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::param::Param;

/// A mapping from rule name to failure-message template.
///
/// Not every rule needs an entry; a missing entry is expected and handled
/// by the fallback in [`render`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    templates: BTreeMap<String, String>,
}

impl MessageTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the template for a rule.
    pub fn with_template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(name.into(), template.into());
        self
    }

    /// Looks up the template for a rule.
    pub fn template(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Number of templates in the table.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the table has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Renders the failure message for a rule.
///
/// With no table, or no entry for the rule, the result is the generic
/// `"<arg0> is invalid"`, where `<arg0>` is the first argument
/// (conventionally the field label) or the literal `undefined` when no
/// arguments were supplied at all.
///
/// Otherwise each argument replaces every occurrence of its `%k` token,
/// one index at a time, left to right. A token with no corresponding
/// argument stays literally in the output; this silent degradation is
/// observable behavior and kept as-is, as is the sequential pass (an
/// argument that itself contains a later token gets substituted by the
/// later pass).
pub fn render(table: Option<&MessageTable>, name: &str, args: &[Param]) -> String {
    let Some(template) = table.and_then(|t| t.template(name)) else {
        let label = args
            .first()
            .map(Param::to_string)
            .unwrap_or_else(|| "undefined".to_string());
        return format!("{label} is invalid");
    };
    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        let token = format!("%{}", index + 1);
        message = message.replace(&token, &arg.to_string());
    }
    message
}
