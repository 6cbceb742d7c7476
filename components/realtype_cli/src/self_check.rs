//! Built-in assertion suite for the classifier.

use assert_reporter::Reporter;
use core_types::{TypeLabel, Value};
use num_bigint::BigInt;
use type_classifier::{
    all_same_basic_type, all_unique_real_types, basic_types_of, count_real_types, real_type_of,
    real_types_of,
};

fn strings(items: &[&str]) -> Value {
    Value::array_from(items.iter().map(|s| Value::from(*s)).collect())
}

fn labels(items: Vec<TypeLabel>) -> Value {
    Value::array_from(items.into_iter().map(Value::from).collect())
}

fn pairs(items: &[(&str, i32)]) -> Value {
    Value::array_from(
        items
            .iter()
            .map(|(label, count)| Value::array_from(vec![Value::from(*label), Value::Smi(*count)]))
            .collect(),
    )
}

/// One value of each real type, in label declaration order
pub fn one_of_each() -> Vec<Value> {
    vec![
        Value::Boolean(true),
        Value::Smi(1),
        Value::string("s"),
        Value::object(),
        Value::function(Some("f")),
        Value::Undefined,
        Value::symbol(Some("s")),
        Value::BigInt(BigInt::from(1)),
        Value::array(),
        Value::Null,
        Value::Double(f64::NAN),
        Value::Double(f64::INFINITY),
        Value::date(0.0),
        Value::regexp("x", "g"),
        Value::set_from(vec![]),
        Value::map_from(vec![]),
    ]
}

/// Runs every section of the suite through `reporter`.
pub fn run(reporter: &mut Reporter) {
    let each = one_of_each();

    reporter.section("basicTypesOf");
    reporter.run_assertion(
        "classifies one of each kind",
        &labels(basic_types_of(&each)),
        &strings(&[
            "boolean",
            "number",
            "string",
            "object",
            "function",
            "undefined",
            "symbol",
            "bigint",
            "object",
            "object",
            "number",
            "number",
            "object",
            "object",
            "object",
            "object",
        ]),
    );
    reporter.run_assertion(
        "keeps the input length",
        &Value::from(basic_types_of(&each).len()),
        &Value::from(each.len()),
    );
    reporter.run_assertion(
        "empty input gives no labels",
        &labels(basic_types_of(&[])),
        &Value::array(),
    );

    reporter.section("allSameBasicType");
    reporter.run_assertion(
        "empty input",
        &Value::from(all_same_basic_type(&[])),
        &Value::from(true),
    );
    reporter.run_assertion(
        "null, array and object are all objects",
        &Value::from(all_same_basic_type(&[
            Value::Null,
            Value::array(),
            Value::object(),
        ])),
        &Value::from(true),
    );
    reporter.run_assertion(
        "NaN and Infinity are numbers",
        &Value::from(all_same_basic_type(&[
            Value::Double(f64::NAN),
            Value::Double(f64::INFINITY),
            Value::Smi(3),
        ])),
        &Value::from(true),
    );
    reporter.run_assertion(
        "number and string differ",
        &Value::from(all_same_basic_type(&[Value::Smi(1), Value::string("1")])),
        &Value::from(false),
    );

    reporter.section("realTypeOf");
    reporter.run_assertion(
        "NaN",
        &Value::from(real_type_of(&Value::Double(f64::NAN))),
        &Value::from("NaN"),
    );
    reporter.run_assertion(
        "positive Infinity",
        &Value::from(real_type_of(&Value::Double(f64::INFINITY))),
        &Value::from("Infinity"),
    );
    reporter.run_assertion(
        "negative Infinity",
        &Value::from(real_type_of(&Value::Double(f64::NEG_INFINITY))),
        &Value::from("Infinity"),
    );
    reporter.run_assertion(
        "empty array",
        &Value::from(real_type_of(&Value::array())),
        &Value::from("array"),
    );
    reporter.run_assertion(
        "null",
        &Value::from(real_type_of(&Value::Null)),
        &Value::from("null"),
    );
    reporter.run_assertion(
        "empty object",
        &Value::from(real_type_of(&Value::object())),
        &Value::from("object"),
    );
    reporter.run_assertion(
        "one of each kind",
        &labels(real_types_of(&each)),
        &strings(&[
            "boolean",
            "number",
            "string",
            "object",
            "function",
            "undefined",
            "symbol",
            "bigint",
            "array",
            "null",
            "NaN",
            "Infinity",
            "date",
            "regexp",
            "set",
            "map",
        ]),
    );

    reporter.section("allUniqueRealTypes");
    reporter.run_assertion(
        "empty input",
        &Value::from(all_unique_real_types(&[])),
        &Value::from(true),
    );
    reporter.run_assertion(
        "boolean, number and string",
        &Value::from(all_unique_real_types(&[
            Value::Boolean(true),
            Value::Smi(1),
            Value::string("x"),
        ])),
        &Value::from(true),
    );
    reporter.run_assertion(
        "two booleans",
        &Value::from(all_unique_real_types(&[
            Value::Boolean(true),
            Value::Smi(1),
            Value::Boolean(false),
        ])),
        &Value::from(false),
    );
    reporter.run_assertion(
        "one of each kind",
        &Value::from(all_unique_real_types(&each)),
        &Value::from(true),
    );

    reporter.section("countRealTypes");
    reporter.run_assertion(
        "booleans, null and object",
        &count_real_types(&[
            Value::Boolean(true),
            Value::Null,
            Value::Boolean(true),
            Value::Boolean(true),
            Value::object(),
        ])
        .to_value(),
        &pairs(&[("boolean", 3), ("null", 1), ("object", 1)]),
    );
    reporter.run_assertion(
        "one each of five kinds",
        &count_real_types(&[
            Value::array(),
            Value::string("123"),
            Value::Null,
            Value::object(),
            Value::Smi(5),
        ])
        .to_value(),
        &pairs(&[
            ("array", 1),
            ("null", 1),
            ("number", 1),
            ("object", 1),
            ("string", 1),
        ]),
    );
    reporter.run_assertion(
        "special numbers sort first",
        &count_real_types(&[
            Value::Smi(2),
            Value::Double(f64::NAN),
            Value::Double(f64::NEG_INFINITY),
            Value::Double(f64::INFINITY),
        ])
        .to_value(),
        &pairs(&[("Infinity", 2), ("NaN", 1), ("number", 1)]),
    );

    reporter.finish();
}
