//! Unit tests for deep_equal

use assert_reporter::deep_equal;
use core_types::Value;

fn arr(values: Vec<Value>) -> Value {
    Value::array_from(values)
}

fn nums(values: &[i32]) -> Value {
    arr(values.iter().map(|n| Value::Smi(*n)).collect())
}

#[test]
fn test_equal_flat_arrays() {
    assert!(deep_equal(&nums(&[1, 2, 3]), &nums(&[1, 2, 3])));
}

#[test]
fn test_changed_element() {
    assert!(!deep_equal(&nums(&[1, 2, 3]), &nums(&[1, 5, 3])));
}

#[test]
fn test_empty_arrays() {
    assert!(deep_equal(&arr(vec![]), &arr(vec![])));
}

#[test]
fn test_label_pairs_compare_by_content() {
    let counts = |n: i32| {
        arr(vec![
            arr(vec![Value::string("boolean"), Value::Smi(n)]),
            arr(vec![Value::string("null"), Value::Smi(1)]),
        ])
    };
    assert!(deep_equal(&counts(3), &counts(3)));
    assert!(!deep_equal(&counts(3), &counts(2)));
}

#[test]
fn test_regrouped_nesting_compares_equal() {
    // [[1, 2], [3]] and [[1], [2, 3]] both flatten to [1, 2, 3]
    let a = arr(vec![nums(&[1, 2]), nums(&[3])]);
    let b = arr(vec![nums(&[1]), nums(&[2, 3])]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_nested_versus_flat_same_length() {
    // [[1, 2], 3] flattens to [1, 2, 3]; [1, 2] has a different top-level length
    let a = arr(vec![nums(&[1, 2]), Value::Smi(3)]);
    assert!(!deep_equal(&a, &nums(&[1, 2])));
    // [[1], 2] and [1, [2]] both flatten to [1, 2]
    let b = arr(vec![nums(&[1]), Value::Smi(2)]);
    let c = arr(vec![Value::Smi(1), nums(&[2])]);
    assert!(deep_equal(&b, &c));
}

#[test]
fn test_longer_second_flattening_is_ignored() {
    // Only the first operand's flattened positions are walked
    let a = arr(vec![nums(&[1]), nums(&[2])]);
    let b = arr(vec![nums(&[1]), nums(&[2, 3])]);
    assert!(deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
}

#[test]
fn test_missing_position_reads_as_undefined() {
    let a = arr(vec![nums(&[1]), arr(vec![Value::Smi(2), Value::Undefined])]);
    let b = arr(vec![nums(&[1]), nums(&[2])]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn test_second_level_arrays_compare_by_identity() {
    let inner = nums(&[1]);
    let same = arr(vec![arr(vec![inner.clone()])]);
    let also_same = arr(vec![arr(vec![inner])]);
    assert!(deep_equal(&same, &also_same));

    let copy = arr(vec![arr(vec![nums(&[1])])]);
    assert!(!deep_equal(&same, &copy));
}

#[test]
fn test_objects_compare_by_identity() {
    let obj = Value::object();
    assert!(deep_equal(&arr(vec![obj.clone()]), &arr(vec![obj])));
    assert!(!deep_equal(
        &arr(vec![Value::object()]),
        &arr(vec![Value::object()])
    ));
}

#[test]
fn test_nan_elements_never_equal() {
    let a = arr(vec![Value::Double(f64::NAN)]);
    assert!(!deep_equal(&a, &a.clone()));
}
