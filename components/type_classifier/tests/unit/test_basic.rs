//! Unit tests for basic classification

use crate::samples;
use core_types::{TypeLabel, Value};
use type_classifier::{all_same_basic_type, basic_type_of, basic_types_of};

#[test]
fn test_basic_type_of_every_kind() {
    for (value, basic, _) in samples::every_kind() {
        assert_eq!(basic_type_of(&value), basic, "{}", value.inspect());
    }
}

#[test]
fn test_basic_labels_are_basic() {
    for value in samples::values() {
        assert!(basic_type_of(&value).is_basic());
    }
}

#[test]
fn test_basic_types_of_preserves_length_and_order() {
    let values = samples::values();
    for n in 0..=values.len() {
        let labels = basic_types_of(&values[..n]);
        assert_eq!(labels.len(), n);
        for (label, value) in labels.iter().zip(&values[..n]) {
            assert_eq!(*label, basic_type_of(value));
        }
    }
}

#[test]
fn test_basic_types_of_mixed() {
    let values = vec![
        Value::Boolean(false),
        Value::Null,
        Value::Smi(1),
        Value::string("1"),
    ];
    assert_eq!(
        basic_types_of(&values),
        vec![
            TypeLabel::Boolean,
            TypeLabel::Object,
            TypeLabel::Number,
            TypeLabel::String
        ]
    );
}

#[test]
fn test_all_same_basic_type_objects() {
    let values = vec![
        Value::object(),
        Value::Null,
        Value::array(),
        Value::date(0.0),
        Value::regexp("x", ""),
        Value::set_from(vec![]),
        Value::map_from(vec![]),
    ];
    assert!(all_same_basic_type(&values));
}

#[test]
fn test_all_same_basic_type_numbers() {
    let values = vec![
        Value::Smi(1),
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
    ];
    assert!(all_same_basic_type(&values));
}

#[test]
fn test_all_same_basic_type_mismatch() {
    assert!(!all_same_basic_type(&[Value::object(), Value::function(None)]));
    assert!(!all_same_basic_type(&[Value::Undefined, Value::Null]));
}

#[test]
fn test_all_same_basic_type_empty() {
    assert!(all_same_basic_type(&[]));
}
