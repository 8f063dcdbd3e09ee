//! en-US message catalog.

use super::MessageTable;

/// Builds the shipped en-US message table.
///
/// `exists` and `regex` deliberately have no entry; failures of those rules
/// fall back to the generic "is invalid" message.
pub fn en_us() -> MessageTable {
    MessageTable::new()
        .with_template("email", "%1 must be an email address")
        .with_template("equals", "%1 must equal %2")
        .with_template("greaterThan", "%1 must be greater than %2")
        .with_template("integer", "%1 must be an integer")
        .with_template("length", "%1 must have length equal to %2")
        .with_template("lessThan", "%1 must be less than %2")
        .with_template("max", "%1 must be at most %2")
        .with_template("maxLength", "%1 must have a maximum length of %2")
        .with_template("min", "%1 must be at least %2")
        .with_template("minLength", "%1 must have a minimum length of %2")
        .with_template("number", "%1 must be a number")
        .with_template("numeric", "%1 must only contain numbers")
        .with_template("required", "%1 is required")
        .with_template("startsWith", "%1 must start with %2")
        .with_template("url", "%1 must be a url")
}
