//! Binding adapter between the rule catalog and a host validation registry.
//!
//! The adapter owns a rule library, an optional message table and an alias
//! list, all immutable after construction. [`FormAdapter::plug_into`] walks
//! the library and the alias list and hands one wrapper function per name
//! to the host registry. Each wrapper closes over the adapter's own
//! configuration (predicate pointer, rule name, content handle), never over
//! the registry, so plugging into any number of registries is safe.
//!
//! # Example
//!
//! ```
//! use plumb::prelude::*;
//!
//! struct MyRegistry; // the host's validation registry
//! # impl ValidationRegistry for MyRegistry {
//! #     fn set_required(&mut self, _: ValidationFn) {}
//! #     fn register_validation(&mut self, _: &str, _: ValidationFn) {}
//! # }
//!
//! let mut registry = MyRegistry;
//! FormAdapter::default().plug_into(&mut registry);
//! ```

use std::sync::Arc;

use crate::alias::{self, Alias};
use crate::content::{self, MessageTable};
use crate::param::Param;
use crate::rules::{Rule, RuleLibrary};
use crate::value::Value;

/// A host-consumable validation function.
///
/// Called with `(value, label, params)`; returns `None` when the value is
/// valid and `Some(message)` when it is not. The message is never empty.
/// Wrappers are stateless and safe to call concurrently and repeatedly.
pub type ValidationFn = Arc<dyn Fn(&Value, &str, &[Param]) -> Option<String> + Send + Sync>;

/// The two hooks a host form-state framework exposes for validators.
///
/// The host is responsible for invoking a registered function at
/// field-validation time and treating `Some(message)` as a failure.
pub trait ValidationRegistry {
    /// Installs the host's first-class "required" validator.
    fn set_required(&mut self, validation: ValidationFn);

    /// Installs a validator under a name.
    fn register_validation(&mut self, name: &str, validation: ValidationFn);
}

/// Binds a [`RuleLibrary`], a [`MessageTable`] and an alias list into
/// host-consumable validation functions.
///
/// `Default` yields the standard configuration (standard catalog, en-US
/// messages, standard aliases); custom configurations are freely
/// constructible for testing or localization.
#[derive(Debug, Clone)]
pub struct FormAdapter {
    library: RuleLibrary,
    content: Option<Arc<MessageTable>>,
    aliases: Vec<Alias>,
}

impl FormAdapter {
    /// Creates an adapter from explicit parts.
    ///
    /// `content` may be `None`, in which case every failure message uses
    /// the generic fallback.
    pub fn new(library: RuleLibrary, content: Option<MessageTable>, aliases: Vec<Alias>) -> Self {
        Self {
            library,
            content: content.map(Arc::new),
            aliases,
        }
    }

    /// Registers one wrapper per rule, plus one per alias, with the host.
    ///
    /// A `required` rule, if defined, is additionally installed through the
    /// distinguished [`ValidationRegistry::set_required`] hook. An alias
    /// whose canonical rule is not in the library is skipped with a
    /// warning.
    pub fn plug_into(&self, registry: &mut dyn ValidationRegistry) {
        if let Some(rule) = self.library.get("required") {
            registry.set_required(self.wrap(rule));
        }

        for rule in self.library.iter() {
            registry.register_validation(rule.name, self.wrap(rule));
        }

        let mut registered_aliases = 0;
        for alias in &self.aliases {
            match self.library.get(&alias.rule) {
                Some(rule) => {
                    registry.register_validation(&alias.alias, self.wrap(rule));
                    registered_aliases += 1;
                }
                None => {
                    log::warn!(
                        "Skipping alias '{}': no rule named '{}'",
                        alias.alias,
                        alias.rule
                    );
                }
            }
        }

        log::debug!(
            "Registered {} validation rules and {} aliases",
            self.library.len(),
            registered_aliases
        );
    }

    /// Builds the wrapper for a single rule without a registry.
    ///
    /// Returns `None` if no rule with this name exists.
    pub fn validation_fn(&self, name: &str) -> Option<ValidationFn> {
        self.library.get(name).map(|rule| self.wrap(rule))
    }

    fn wrap(&self, rule: &Rule) -> ValidationFn {
        let predicate = rule.predicate;
        let name = rule.name;
        let content = self.content.clone();
        Arc::new(move |value, label, params| {
            if predicate(value, params) {
                return None;
            }
            let mut args = Vec::with_capacity(params.len() + 1);
            args.push(Param::Str(label.to_string()));
            args.extend(params.iter().cloned());
            Some(content::render(content.as_deref(), name, &args))
        })
    }
}

impl Default for FormAdapter {
    fn default() -> Self {
        Self::new(
            RuleLibrary::standard(),
            Some(content::en_us()),
            alias::standard(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_passes_and_fails() {
        let adapter = FormAdapter::default();
        let validate = adapter.validation_fn("required").unwrap();
        assert_eq!(validate(&Value::from("a"), "Field", &[]), None);
        assert_eq!(
            validate(&Value::from(""), "Field", &[]),
            Some("Field is required".to_string())
        );
    }

    #[test]
    fn test_validation_fn_unknown_rule() {
        let adapter = FormAdapter::default();
        assert!(adapter.validation_fn("nope").is_none());
    }
}
