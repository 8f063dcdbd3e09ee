//! Typed rule parameters

use std::fmt;

use regex::Regex;

use crate::error::InvalidPatternError;

/// A typed parameter passed alongside a value to a rule.
///
/// Rules take an ordered slice of parameters; each rule documents how many
/// it expects and of which variant. A parameter of the wrong variant makes
/// the rule return `false` rather than panic.
///
/// Parameters also feed message interpolation: their [`Display`](fmt::Display)
/// form is what replaces the `%2`, `%3`, … placeholders of a failure
/// template.
#[derive(Debug, Clone)]
pub enum Param {
    /// String parameter (e.g. the prefix for `startsWith`).
    Str(String),
    /// Numeric parameter (baselines and sizes).
    Number(f64),
    /// Boolean parameter (baseline for `equals`).
    Bool(bool),
    /// Compiled pattern parameter for the `regex` rule.
    Pattern(Regex),
}

impl Param {
    /// Compiles a pattern parameter for the `regex` rule.
    ///
    /// This is the only fallible constructor in the crate.
    pub fn pattern(pattern: &str) -> Result<Self, InvalidPatternError> {
        match Regex::new(pattern) {
            Ok(re) => Ok(Param::Pattern(re)),
            Err(source) => Err(InvalidPatternError {
                pattern: pattern.to_string(),
                source,
            }),
        }
    }

    /// Returns the variant name of this parameter.
    pub fn type_name(&self) -> &'static str {
        match self {
            Param::Str(_) => "str",
            Param::Number(_) => "number",
            Param::Bool(_) => "bool",
            Param::Pattern(_) => "pattern",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Str(s) => f.write_str(s),
            // Whole numbers render without a trailing ".0" so messages read
            // "at least 8" rather than "at least 8.0".
            Param::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            Param::Number(n) => write!(f, "{n}"),
            Param::Bool(b) => write!(f, "{b}"),
            Param::Pattern(re) => f.write_str(re.as_str()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Param::Bool(v)
    }
}

impl From<i32> for Param {
    fn from(v: i32) -> Self {
        Param::Number(v as f64)
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Param::Number(v as f64)
    }
}

impl From<usize> for Param {
    fn from(v: usize) -> Self {
        Param::Number(v as f64)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Number(v)
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Param::Str(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Param::Str(v.to_string())
    }
}

impl From<Regex> for Param {
    fn from(v: Regex) -> Self {
        Param::Pattern(v)
    }
}
