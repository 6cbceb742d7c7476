//! Classifier -> Reporter Integration Tests
//!
//! Tests that classifier results flow through the reporter and that the
//! built-in suite reports every assertion as passing.

use assert_reporter::Reporter;
use core_types::Value;
use realtype_cli::{parse_values, self_check};
use std::cell::RefCell;
use std::rc::Rc;
use type_classifier::{count_real_types, real_types_of};

fn capture() -> (Rc<RefCell<Vec<String>>>, Reporter) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let reporter = Reporter::with_capture(output.clone());
    (output, reporter)
}

/// Test: the self-check suite passes and is grouped into five sections
#[test]
fn test_self_check_all_pass() {
    let (output, mut reporter) = capture();

    self_check::run(&mut reporter);

    let lines = output.borrow();
    let headers: Vec<&String> = lines.iter().filter(|l| l.starts_with("== ")).collect();
    assert_eq!(
        headers,
        vec![
            "== basicTypesOf ==",
            "== allSameBasicType ==",
            "== realTypeOf ==",
            "== allUniqueRealTypes ==",
            "== countRealTypes ==",
        ]
    );
    assert!(lines.iter().all(|l| !l.contains("FAIL")));
    assert_eq!(lines.last().map(String::as_str), Some(""));
}

/// Test: counts compared against a copy read from the same literal pass
#[test]
fn test_counts_against_literal_expectation() {
    let (output, reporter) = capture();
    let values = parse_values("[true, null, true, true, {}]").unwrap();
    let expected = Value::array_from(parse_values("[['boolean', 3], ['null', 1], ['object', 1]]").unwrap());

    reporter.run_assertion("counts", &count_real_types(&values).to_value(), &expected);

    assert_eq!(output.borrow()[0], "PASS: counts");
}

/// Test: a mismatching classification reports both values
#[test]
fn test_mismatch_reports_both_values() {
    let (output, mut reporter) = capture();
    let values = parse_values("[NaN, Infinity]").unwrap();
    let actual = Value::array_from(real_types_of(&values).into_iter().map(Value::from).collect());
    let expected = Value::array_from(vec![Value::from("number"), Value::from("Infinity")]);

    reporter.section("realTypesOf");
    reporter.run_assertion("special numbers", &actual, &expected);
    reporter.finish();

    let lines = output.borrow();
    assert_eq!(
        lines[1],
        "  FAIL: special numbers | expected: [ 'number', 'Infinity' ] | actual: [ 'NaN', 'Infinity' ]"
    );
    assert_eq!(lines.len(), 3);
}
