//! Tolerant coercion of raw attribute values.
//!
//! Both functions are total: they never fail and never panic. Anything
//! that cannot be read as the target type falls back to the zero value.

use crate::types::AttributeValue;

/// Coerce a raw value to a number, defaulting to `0.0`.
///
/// - `Number(n)` gives `n`
/// - `Text(s)` gives `s` parsed as a base-10 float after trimming
/// - empty text, absent values, booleans, arrays, objects and anything that
///   does not parse to a finite number give `0.0`
///
/// Fractions are preserved; rounding is a presentation concern.
pub fn to_number_or_zero(value: Option<&AttributeValue>) -> f64 {
    let n = match value {
        Some(AttributeValue::Number(n)) => *n,
        Some(AttributeValue::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Coerce a raw value to a boolean, defaulting to `false`.
///
/// Only `true`, the string `"1"` and the number `1` are true.
pub fn to_bool_or_false(value: Option<&AttributeValue>) -> bool {
    match value {
        Some(AttributeValue::Bool(b)) => *b,
        Some(AttributeValue::Text(s)) => s == "1",
        Some(AttributeValue::Number(n)) => *n == 1.0,
        _ => false,
    }
}
