//! The predicate functions behind the standard rule catalog.
//!
//! Every predicate shares the [`Predicate`](super::Predicate) signature so
//! it can sit in a lookup table, and every predicate fails closed: a value
//! of an unexpected shape, or a parameter of the wrong variant, yields
//! `false` rather than a panic.
//!
//! Several rules are "required-gated": they first apply [`required`] and
//! fail if it fails. This is deliberate — a boolean or a bare number never
//! silently passes a numeric comparison; only non-blank strings are
//! compared.

use std::sync::LazyLock;

use regex::Regex;

use super::url::is_web_url;
use crate::param::Param;
use crate::value::Value;

/// Permissive email shape: something, `@`, something, `.`, something.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern must compile"));

/// Optional leading minus, then digits. No `+`, no decimal point, no padding.
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern must compile"));

/// Digits only.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric pattern must compile"));

/// The value is a string whose trimmed form is non-empty.
pub fn required(value: &Value, _params: &[Param]) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        _ => false,
    }
}

/// The value was supplied and is not null. An empty string exists.
pub fn exists(value: &Value, _params: &[Param]) -> bool {
    !value.is_absent() && !value.is_null()
}

/// Required-gated; the raw (untrimmed) value matches the permissive email
/// shape. Multiple `@`s and consecutive dots are accepted; padding
/// whitespace is not.
pub fn email(value: &Value, _params: &[Param]) -> bool {
    matches_pattern(value, &EMAIL)
}

/// Required-gated; the raw value matches the pattern parameter.
///
/// Params: 1, [`Param::Pattern`].
pub fn regex(value: &Value, params: &[Param]) -> bool {
    let Some(Param::Pattern(pattern)) = params.first() else {
        return false;
    };
    matches_pattern(value, pattern)
}

/// The raw value is an optional `-` followed by digits.
pub fn integer(value: &Value, _params: &[Param]) -> bool {
    matches_pattern(value, &INTEGER)
}

/// Required-gated; numeric conversion of the value succeeds. Conversion
/// trims and accepts a sign, a decimal point and an exponent.
pub fn number(value: &Value, _params: &[Param]) -> bool {
    to_number(value).is_some()
}

/// The raw value is digits only.
pub fn numeric(value: &Value, _params: &[Param]) -> bool {
    matches_pattern(value, &NUMERIC)
}

/// Strict identity between the value and the baseline parameter: same
/// shape and equal content, no coercion. Lists and maps are never equal.
///
/// Params: 1, any variant.
pub fn equals(value: &Value, params: &[Param]) -> bool {
    match (value, params.first()) {
        (Value::String(v), Some(Param::Str(b))) => v == b,
        (Value::Number(v), Some(Param::Number(b))) => v == b,
        (Value::Bool(v), Some(Param::Bool(b))) => v == b,
        _ => false,
    }
}

/// Required-gated; numeric conversion of the value is `>` the baseline.
///
/// Params: 1, [`Param::Number`].
pub fn greater_than(value: &Value, params: &[Param]) -> bool {
    compare(value, params, |n, baseline| n > baseline)
}

/// Required-gated; numeric conversion of the value is `<` the baseline.
///
/// Params: 1, [`Param::Number`].
pub fn less_than(value: &Value, params: &[Param]) -> bool {
    compare(value, params, |n, baseline| n < baseline)
}

/// Required-gated; numeric conversion of the value is `>=` the baseline.
///
/// Params: 1, [`Param::Number`].
pub fn min(value: &Value, params: &[Param]) -> bool {
    compare(value, params, |n, baseline| n >= baseline)
}

/// Required-gated; numeric conversion of the value is `<=` the baseline.
///
/// Params: 1, [`Param::Number`].
pub fn max(value: &Value, params: &[Param]) -> bool {
    compare(value, params, |n, baseline| n <= baseline)
}

/// The value has a measurable size equal to the parameter. No trimming.
///
/// Params: 1, [`Param::Number`].
pub fn length(value: &Value, params: &[Param]) -> bool {
    sized(value, params, |size, n| size == n)
}

/// The value has a measurable size of at least the parameter.
///
/// Params: 1, [`Param::Number`].
pub fn min_length(value: &Value, params: &[Param]) -> bool {
    sized(value, params, |size, n| size >= n)
}

/// The value has a measurable size of at most the parameter.
///
/// Params: 1, [`Param::Number`].
pub fn max_length(value: &Value, params: &[Param]) -> bool {
    sized(value, params, |size, n| size <= n)
}

/// Required-gated; the raw value starts with the raw prefix parameter.
/// Neither side is trimmed.
///
/// Params: 1, [`Param::Str`].
pub fn starts_with(value: &Value, params: &[Param]) -> bool {
    let Some(Param::Str(prefix)) = params.first() else {
        return false;
    };
    required(value, &[]) && value.as_str().is_some_and(|s| s.starts_with(prefix.as_str()))
}

/// Absent, null and blank-string values are vacuously valid (pair with
/// `required` to reject blanks); any other string must match the strict
/// web-URL grammar; everything else is invalid.
pub fn url(value: &Value, _params: &[Param]) -> bool {
    match value {
        Value::Absent | Value::Null => true,
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || is_web_url(trimmed)
        }
        _ => false,
    }
}

// =============================================================================
// Shared gates
// =============================================================================

fn matches_pattern(value: &Value, pattern: &Regex) -> bool {
    required(value, &[]) && value.as_str().is_some_and(|s| pattern.is_match(s))
}

/// Numeric conversion behind the required gate: only non-blank strings
/// convert; the parse tolerates padding, a sign, a decimal point and an
/// exponent, and rejects NaN.
fn to_number(value: &Value) -> Option<f64> {
    if !required(value, &[]) {
        return None;
    }
    let s = value.as_str()?;
    s.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn compare(value: &Value, params: &[Param], cmp: fn(f64, f64) -> bool) -> bool {
    let Some(Param::Number(baseline)) = params.first() else {
        return false;
    };
    to_number(value).is_some_and(|n| cmp(n, *baseline))
}

fn sized(value: &Value, params: &[Param], cmp: fn(f64, f64) -> bool) -> bool {
    let Some(Param::Number(n)) = params.first() else {
        return false;
    };
    value.size().is_some_and(|size| cmp(size as f64, *n))
}
