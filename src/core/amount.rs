//! Coercion of the `amt` request field
//!
//! Clients may send the amount as a JSON number or as a numeric string.
//! Coercion follows the usual loose numeric rules: blank strings and `null`
//! become zero, booleans become 0 or 1, and anything unparsable is NaN.

use serde_json::Value;

/// Coerce a JSON value to a float; a missing value is NaN
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let Some(value) = value else {
        return f64::NAN;
    };

    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// A usable invoice amount: finite and non-zero
///
/// Sign is not checked here; the store's `amt > 0` constraint rejects
/// negative amounts.
pub fn parse_amount(value: Option<&Value>) -> Option<f64> {
    let amt = coerce_number(value);
    (amt.is_finite() && amt != 0.0).then_some(amt)
}
