//! Validation rule catalog.
//!
//! A rule is a named pure predicate over a [`Value`] and a slice of typed
//! [`Param`]s. Rules live in a [`RuleLibrary`], an insertion-ordered table
//! with unique names; [`RuleLibrary::standard`] builds the shipped
//! seventeen-rule catalog.
//!
//! Rule names keep their host-facing spelling (`greaterThan`, `minLength`)
//! because they are string keys the form host looks validators up by, not
//! Rust identifiers.

pub mod predicates;

mod url;

use crate::param::Param;
use crate::value::Value;

/// Signature shared by every rule predicate.
///
/// Plain function pointer: no captured state, no dynamic dispatch.
pub type Predicate = fn(&Value, &[Param]) -> bool;

/// A named validation rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The canonical name the rule is registered under.
    pub name: &'static str,
    /// The predicate that decides validity.
    pub predicate: Predicate,
}

impl Rule {
    /// Creates a new rule.
    pub const fn new(name: &'static str, predicate: Predicate) -> Self {
        Self { name, predicate }
    }
}

/// An insertion-ordered collection of uniquely named rules.
#[derive(Debug, Clone, Default)]
pub struct RuleLibrary {
    rules: Vec<Rule>,
}

impl RuleLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds the standard rule catalog.
    pub fn standard() -> Self {
        Self::new()
            .with_rule("email", predicates::email)
            .with_rule("equals", predicates::equals)
            .with_rule("exists", predicates::exists)
            .with_rule("greaterThan", predicates::greater_than)
            .with_rule("integer", predicates::integer)
            .with_rule("length", predicates::length)
            .with_rule("lessThan", predicates::less_than)
            .with_rule("max", predicates::max)
            .with_rule("maxLength", predicates::max_length)
            .with_rule("min", predicates::min)
            .with_rule("minLength", predicates::min_length)
            .with_rule("number", predicates::number)
            .with_rule("numeric", predicates::numeric)
            .with_rule("regex", predicates::regex)
            .with_rule("required", predicates::required)
            .with_rule("startsWith", predicates::starts_with)
            .with_rule("url", predicates::url)
    }

    /// Adds a rule, or replaces the predicate of an existing rule with the
    /// same name.
    pub fn with_rule(mut self, name: &'static str, predicate: Predicate) -> Self {
        match self.rules.iter_mut().find(|rule| rule.name == name) {
            Some(rule) => rule.predicate = predicate,
            None => self.rules.push(Rule::new(name, predicate)),
        }
        self
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Returns `true` if a rule with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules in the library.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the library has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_names() {
        let library = RuleLibrary::standard();
        assert_eq!(library.len(), 17);
        for name in [
            "email",
            "equals",
            "exists",
            "greaterThan",
            "integer",
            "length",
            "lessThan",
            "max",
            "maxLength",
            "min",
            "minLength",
            "number",
            "numeric",
            "regex",
            "required",
            "startsWith",
            "url",
        ] {
            assert!(library.contains(name), "missing rule {name}");
        }
    }

    #[test]
    fn test_with_rule_replaces_by_name() {
        fn always(_: &Value, _: &[Param]) -> bool {
            true
        }

        let library = RuleLibrary::standard().with_rule("required", always);
        assert_eq!(library.len(), 17);
        let rule = library.get("required").unwrap();
        assert!((rule.predicate)(&Value::Null, &[]));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        fn always(_: &Value, _: &[Param]) -> bool {
            true
        }

        let library = RuleLibrary::new()
            .with_rule("b", always)
            .with_rule("a", always)
            .with_rule("c", always);
        let names: Vec<&str> = library.iter().map(|rule| rule.name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
