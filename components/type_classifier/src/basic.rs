//! Basic (`typeof`) classification.

use core_types::{TypeLabel, Value};

/// Returns the coarse `typeof` category of a value.
///
/// Numbers are always `number`, including NaN and the infinities.
pub fn basic_type_of(value: &Value) -> TypeLabel {
    value.type_of()
}

/// Maps [`basic_type_of`] over a slice, preserving order and length.
pub fn basic_types_of(values: &[Value]) -> Vec<TypeLabel> {
    values.iter().map(basic_type_of).collect()
}

/// Returns true if every value shares one basic type.
///
/// An empty slice is vacuously uniform.
///
/// ```
/// use core_types::Value;
/// use type_classifier::all_same_basic_type;
///
/// assert!(all_same_basic_type(&[]));
/// assert!(all_same_basic_type(&[Value::Null, Value::array()]));
/// assert!(!all_same_basic_type(&[Value::Smi(1), Value::string("1")]));
/// ```
pub fn all_same_basic_type(values: &[Value]) -> bool {
    let mut labels = values.iter().map(basic_type_of);
    match labels.next() {
        None => true,
        Some(first) => {
            let same = labels.all(|label| label == first);
            log::trace!("all_same_basic_type: first={} same={}", first, same);
            same
        }
    }
}
