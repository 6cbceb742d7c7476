//! Unit tests for real type counting

use crate::samples;
use core_types::{TypeLabel, Value};
use type_classifier::count_real_types;

#[test]
fn test_count_booleans_null_object() {
    let values = vec![
        Value::Boolean(true),
        Value::Null,
        Value::Boolean(true),
        Value::Boolean(true),
        Value::object(),
    ];
    assert_eq!(
        count_real_types(&values).pairs(),
        &[
            (TypeLabel::Boolean, 3),
            (TypeLabel::Null, 1),
            (TypeLabel::Object, 1)
        ]
    );
}

#[test]
fn test_count_one_of_each() {
    let values = vec![
        Value::array(),
        Value::string("123"),
        Value::Null,
        Value::object(),
        Value::Smi(5),
    ];
    assert_eq!(
        count_real_types(&values).pairs(),
        &[
            (TypeLabel::Array, 1),
            (TypeLabel::Null, 1),
            (TypeLabel::Number, 1),
            (TypeLabel::Object, 1),
            (TypeLabel::String, 1)
        ]
    );
}

#[test]
fn test_count_sorted_and_sums_to_length() {
    let values = samples::values();
    for n in 0..=values.len() {
        let counts = count_real_types(&values[..n]);
        assert_eq!(counts.total(), n);
        let labels: Vec<&str> = counts.iter().map(|(l, _)| l.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }
}

#[test]
fn test_count_independent_of_input_order() {
    let mut values = samples::values();
    let forward = count_real_types(&values);
    values.reverse();
    assert_eq!(count_real_types(&values), forward);
}

#[test]
fn test_count_to_value_shape() {
    let counts = count_real_types(&[Value::Smi(1), Value::Double(f64::NAN), Value::Smi(2)]);
    assert_eq!(
        counts.to_value().inspect(),
        "[ [ 'NaN', 1 ], [ 'number', 2 ] ]"
    );
}
