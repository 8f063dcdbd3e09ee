//! Alias names for rules.

use serde::Deserialize;
use serde::Serialize;

/// An alternate registration name for a canonical rule.
///
/// Multiple aliases may point at the same rule. Aliases resolve against
/// canonical rules only; there is no alias chaining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// The canonical rule name this alias resolves to.
    pub rule: String,
    /// The alternate name to register the rule under.
    pub alias: String,
}

impl Alias {
    /// Creates a new alias.
    pub fn new(rule: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            alias: alias.into(),
        }
    }
}

/// The shipped alias set.
pub fn standard() -> Vec<Alias> {
    vec![
        Alias::new("equals", "eq"),
        Alias::new("greaterThan", "gt"),
        Alias::new("integer", "int"),
        Alias::new("length", "len"),
        Alias::new("lessThan", "lt"),
        Alias::new("max", "lte"),
        Alias::new("maxLength", "maxlen"),
        Alias::new("maxLength", "xlen"),
        Alias::new("min", "gte"),
        Alias::new("minLength", "minlen"),
        Alias::new("minLength", "nlen"),
    ]
}
