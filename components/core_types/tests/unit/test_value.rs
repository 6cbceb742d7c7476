//! Unit tests for Value enum

use core_types::{TypeLabel, Value};
use num_bigint::BigInt;

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_boolean() {
        let val = Value::from(true);
        assert!(matches!(val, Value::Boolean(true)));
    }

    #[test]
    fn test_value_smi_max() {
        let val = Value::number(i32::MAX as f64);
        assert!(matches!(val, Value::Smi(n) if n == i32::MAX));
    }

    #[test]
    fn test_value_double_out_of_smi_range() {
        let val = Value::number(i32::MAX as f64 + 1.0);
        assert!(matches!(val, Value::Double(_)));
    }

    #[test]
    fn test_value_array_from() {
        let val = Value::array_from(vec![Value::Smi(1), Value::Smi(2)]);
        assert!(val.is_array());
        assert_eq!(val.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_value_from_label() {
        let val = Value::from(TypeLabel::RegExp);
        assert_eq!(val, Value::string("regexp"));
    }
}

#[cfg(test)]
mod value_type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_primitives() {
        assert_eq!(Value::Boolean(false).type_of(), TypeLabel::Boolean);
        assert_eq!(Value::Smi(0).type_of(), TypeLabel::Number);
        assert_eq!(Value::Double(f64::INFINITY).type_of(), TypeLabel::Number);
        assert_eq!(Value::string("").type_of(), TypeLabel::String);
        assert_eq!(Value::symbol(None).type_of(), TypeLabel::Symbol);
        assert_eq!(Value::BigInt(BigInt::from(1)).type_of(), TypeLabel::BigInt);
    }

    #[test]
    fn test_type_of_objects() {
        for value in [
            Value::Null,
            Value::object(),
            Value::array(),
            Value::map_from(vec![]),
            Value::set_from(vec![]),
            Value::date(0.0),
            Value::regexp("x", ""),
        ] {
            assert_eq!(value.type_of(), TypeLabel::Object, "{}", value.inspect());
        }
        assert_eq!(Value::function(Some("f")).type_of(), TypeLabel::Function);
    }
}

#[cfg(test)]
mod value_equality_tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_representations() {
        assert_eq!(Value::Smi(3), Value::Double(3.0));
        assert_ne!(Value::Smi(3), Value::string("3"));
    }

    #[test]
    fn test_nan_not_equal_to_itself() {
        let nan = Value::Double(f64::NAN);
        assert_ne!(nan, nan.clone());
        assert!(nan.same_value_zero(&nan));
    }

    #[test]
    fn test_zero_signs_equal() {
        assert_eq!(Value::Double(-0.0), Value::Smi(0));
    }

    #[test]
    fn test_no_coercion() {
        assert_ne!(Value::Boolean(true), Value::Smi(1));
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::BigInt(BigInt::from(1)), Value::Smi(1));
    }

    #[test]
    fn test_reference_identity() {
        let arr = Value::array_from(vec![Value::Smi(1)]);
        assert_eq!(arr, arr.clone());
        assert_ne!(arr, Value::array_from(vec![Value::Smi(1)]));
        let date = Value::date(0.0);
        assert_ne!(date, Value::date(0.0));
    }
}

#[cfg(test)]
mod value_display_tests {
    use super::*;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Double(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Double(2.0).to_string(), "2");
        assert_eq!(Value::Double(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_display_array_joins() {
        let arr = Value::array_from(vec![Value::Smi(1), Value::Null, Value::string("a")]);
        assert_eq!(arr.to_string(), "1,,a");
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(Value::object().to_string(), "[object Object]");
        assert_eq!(Value::set_from(vec![]).to_string(), "[object Set]");
        assert_eq!(Value::BigInt(BigInt::from(12)).to_string(), "12n");
    }

    #[test]
    fn test_inspect_containers() {
        let obj = Value::object_from(vec![
            ("a".to_string(), Value::Smi(1)),
            ("two words".to_string(), Value::string("it's")),
        ]);
        assert_eq!(obj.inspect(), "{ a: 1, 'two words': 'it\\'s' }");

        let set = Value::set_from(vec![Value::Smi(1), Value::string("x")]);
        assert_eq!(set.inspect(), "Set(2) { 1, 'x' }");
        assert_eq!(Value::map_from(vec![]).inspect(), "Map(0) {}");
    }

    #[test]
    fn test_inspect_functions_and_symbols() {
        assert_eq!(Value::function(Some("f")).inspect(), "[Function: f]");
        assert_eq!(Value::function(None).inspect(), "[Function (anonymous)]");
        assert_eq!(Value::symbol(Some("id")).inspect(), "Symbol(id)");
        assert_eq!(Value::symbol(None).inspect(), "Symbol()");
    }

    #[test]
    fn test_inspect_escapes_control_characters() {
        assert_eq!(Value::symbol(Some("a\nb")).inspect(), "Symbol(a\\nb)");
        assert_eq!(Value::string("tab\there").inspect(), "'tab\\there'");
        assert_eq!(Value::string("\u{7}").inspect(), "'\\u0007'");
        // String() keeps the raw description
        assert_eq!(Value::symbol(Some("a\nb")).to_string(), "Symbol(a\nb)");
    }
}
