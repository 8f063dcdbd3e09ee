//! Validation rules with localized messages for form-state hosts.
//!
//! This crate ships a catalog of named, pure validation predicates, an
//! interpolating message table, and an adapter that binds the two (plus a
//! set of alias names) into any host framework exposing the two
//! [`ValidationRegistry`](adapter::ValidationRegistry) hooks.
//!
//! Evaluation is fully synchronous and side-effect free: predicates never
//! panic on unexpected input, they fail closed; wrappers return `None` for
//! valid values and a localized message for invalid ones.

pub mod adapter;
pub mod alias;
pub mod content;
pub mod error;
pub mod param;
pub mod rules;
pub mod value;

pub mod prelude {
    pub use crate::adapter::{FormAdapter, ValidationFn, ValidationRegistry};
    pub use crate::alias::Alias;
    pub use crate::content::MessageTable;
    pub use crate::error::InvalidPatternError;
    pub use crate::param::Param;
    pub use crate::rules::{Predicate, Rule, RuleLibrary};
    pub use crate::value::Value;
}
