//! Value enum for dynamic form field values

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value as produced by a form host.
///
/// This enum covers the scalar-like shapes a field can hold at validation
/// time. Rules inspect the variant directly and fail closed on shapes they
/// do not understand.
///
/// # Variants
///
/// | Form state | Rust Variant |
/// |------------|--------------|
/// | never supplied | `Absent` |
/// | explicitly empty | `Null` |
/// | checkbox | `Bool` |
/// | numeric input | `Number` |
/// | text input | `String` |
/// | multi-select | `List` |
/// | grouped fields | `Map` |
///
/// # Example
///
/// ```
/// use plumb::value::Value;
///
/// let name = Value::from("Kilgore Trout");
/// let age = Value::from(42);
/// let subscribed = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The field was never supplied. Not representable in data formats.
    #[serde(skip)]
    Absent,
    /// Explicit empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value. Form hosts carry a single number type.
    Number(f64),
    /// String value.
    String(String),
    /// A list of values; has a measurable size.
    List(Vec<Value>),
    /// A map of named values; has no size for validation purposes.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value was never supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns the measurable size of this value, if it has one.
    ///
    /// Strings count characters, lists count elements. Every other variant
    /// has no size concept and returns `None`, so size-family rules fail
    /// closed on it.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_counts_characters() {
        assert_eq!(Value::from("hello").size(), Some(5));
        assert_eq!(Value::from("héllo").size(), Some(5));
        assert_eq!(Value::from("").size(), Some(0));
    }

    #[test]
    fn test_size_counts_list_elements() {
        let list = Value::List(vec![Value::from(1), Value::from(2)]);
        assert_eq!(list.size(), Some(2));
    }

    #[test]
    fn test_no_size_for_other_variants() {
        assert_eq!(Value::Null.size(), None);
        assert_eq!(Value::Absent.size(), None);
        assert_eq!(Value::from(true).size(), None);
        assert_eq!(Value::from(3.0).size(), None);
        assert_eq!(Value::Map(BTreeMap::new()).size(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }
}
