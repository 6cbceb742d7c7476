//! Equality used by assertions.

use core_types::Value;

/// Spreads nested array elements into the outer sequence, one level deep.
///
/// ```
/// use assert_reporter::flatten_one_level;
/// use core_types::Value;
///
/// let inner = Value::array_from(vec![Value::Smi(2), Value::array_from(vec![Value::Smi(3)])]);
/// let flat = flatten_one_level(&[Value::Smi(1), inner]);
/// assert_eq!(flat.len(), 3);
/// assert!(flat[2].is_array());
/// ```
pub fn flatten_one_level(values: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(values.len());
    for value in values {
        match value.as_array() {
            Some(inner) => flat.extend(inner.iter().cloned()),
            None => flat.push(value.clone()),
        }
    }
    flat
}

/// Compares two values the way assertions do.
///
/// Two arrays are equal when their top-level lengths match and their
/// one-level flattenings agree position by position, walking the first
/// operand's flattened length; a position missing from the second operand
/// reads as `undefined`. Nesting that flattens to the same sequence
/// therefore compares equal. Anything else uses strict equality.
///
/// ```
/// use assert_reporter::deep_equal;
/// use core_types::Value;
///
/// let pair = |a: &str, n: i32| Value::array_from(vec![Value::string(a), Value::Smi(n)]);
/// let left = Value::array_from(vec![pair("null", 1), pair("number", 2)]);
/// let right = Value::array_from(vec![pair("null", 1), pair("number", 2)]);
/// assert!(deep_equal(&left, &right));
///
/// assert!(!deep_equal(&Value::object(), &Value::object()));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(left), Some(right)) => {
            if left.len() != right.len() {
                return false;
            }
            let left = flatten_one_level(left);
            let right = flatten_one_level(right);
            left.iter().enumerate().all(|(idx, l)| match right.get(idx) {
                Some(r) => l.strict_equals(r),
                None => matches!(l, Value::Undefined),
            })
        }
        _ => a.strict_equals(b),
    }
}
