//! Error types

/// Error returned when a pattern parameter fails to compile.
///
/// Validation itself never errors; predicates fail closed and wrappers
/// always produce a message. Compiling a [`Param::Pattern`](crate::param::Param)
/// is the one fallible operation.
#[derive(Debug, thiserror::Error)]
#[error("Invalid validation pattern '{pattern}': {source}")]
pub struct InvalidPatternError {
    /// The pattern source that was rejected.
    pub pattern: String,
    /// The underlying compilation error.
    #[source]
    pub source: regex::Error,
}
