//! Real (refined) classification.

use core_types::{TypeLabel, Value};
use std::collections::HashSet;

/// Returns the refined type of a value.
///
/// Numbers become `NaN`, `Infinity` (either sign) or `number`. Values whose
/// basic type is `object` become `array`, `null`, `date`, `regexp`, `set`,
/// `map` or `object`, checked in that order. Every other basic type passes
/// through unchanged.
///
/// ```
/// use core_types::{TypeLabel, Value};
/// use type_classifier::real_type_of;
///
/// assert_eq!(real_type_of(&Value::Double(f64::NEG_INFINITY)), TypeLabel::Infinity);
/// assert_eq!(real_type_of(&Value::array()), TypeLabel::Array);
/// assert_eq!(real_type_of(&Value::object()), TypeLabel::Object);
/// assert_eq!(real_type_of(&Value::string("NaN")), TypeLabel::String);
/// ```
pub fn real_type_of(value: &Value) -> TypeLabel {
    match value {
        Value::Smi(_) => TypeLabel::Number,
        Value::Double(n) if n.is_nan() => TypeLabel::NaN,
        Value::Double(n) if !n.is_finite() => TypeLabel::Infinity,
        Value::Double(_) => TypeLabel::Number,
        Value::Array(_) => TypeLabel::Array,
        Value::Null => TypeLabel::Null,
        Value::Date(_) => TypeLabel::Date,
        Value::RegExp(_) => TypeLabel::RegExp,
        Value::Set(_) => TypeLabel::Set,
        Value::Map(_) => TypeLabel::Map,
        Value::Object(_) => TypeLabel::Object,
        Value::Undefined
        | Value::Boolean(_)
        | Value::String(_)
        | Value::Symbol(_)
        | Value::BigInt(_)
        | Value::Function(_) => value.type_of(),
    }
}

/// Maps [`real_type_of`] over a slice, preserving order and length.
pub fn real_types_of(values: &[Value]) -> Vec<TypeLabel> {
    values.iter().map(real_type_of).collect()
}

/// Returns true if no two values share a real type.
///
/// An empty slice is vacuously unique.
///
/// ```
/// use core_types::Value;
/// use type_classifier::all_unique_real_types;
///
/// assert!(all_unique_real_types(&[Value::Boolean(true), Value::Smi(1), Value::string("x")]));
/// assert!(!all_unique_real_types(&[Value::Boolean(true), Value::Smi(1), Value::Boolean(false)]));
/// ```
pub fn all_unique_real_types(values: &[Value]) -> bool {
    let distinct: HashSet<TypeLabel> = values.iter().map(real_type_of).collect();
    log::trace!(
        "all_unique_real_types: {} distinct of {}",
        distinct.len(),
        values.len()
    );
    distinct.len() == values.len()
}
