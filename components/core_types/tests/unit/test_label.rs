//! Unit tests for TypeLabel

use core_types::TypeLabel;

#[cfg(test)]
mod label_text_tests {
    use super::*;

    #[test]
    fn test_round_trips_through_text() {
        for label in TypeLabel::ALL {
            assert_eq!(label.as_str().parse::<TypeLabel>().unwrap(), label);
            assert_eq!(label.to_string(), label.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("nan".parse::<TypeLabel>().is_err());
        assert!("Object".parse::<TypeLabel>().is_err());
        assert_eq!("NaN".parse::<TypeLabel>().unwrap(), TypeLabel::NaN);
    }
}

#[cfg(test)]
mod label_refinement_tests {
    use super::*;

    #[test]
    fn test_number_refinements() {
        assert_eq!(TypeLabel::NaN.basic_parent(), TypeLabel::Number);
        assert_eq!(TypeLabel::Infinity.basic_parent(), TypeLabel::Number);
        assert!(!TypeLabel::NaN.is_basic());
    }

    #[test]
    fn test_object_refinements() {
        for label in [
            TypeLabel::Array,
            TypeLabel::Null,
            TypeLabel::Date,
            TypeLabel::RegExp,
            TypeLabel::Set,
            TypeLabel::Map,
        ] {
            assert_eq!(label.basic_parent(), TypeLabel::Object);
            assert!(!label.is_basic());
        }
    }

    #[test]
    fn test_basic_labels_are_their_own_parent() {
        for label in TypeLabel::ALL.iter().filter(|l| l.is_basic()) {
            assert_eq!(label.basic_parent(), *label);
        }
    }
}

#[cfg(test)]
mod label_ordering_tests {
    use super::*;

    #[test]
    fn test_uppercase_sorts_first() {
        assert!(TypeLabel::Infinity < TypeLabel::NaN);
        assert!(TypeLabel::NaN < TypeLabel::Array);
        assert!(TypeLabel::Array < TypeLabel::BigInt);
        assert!(TypeLabel::Set < TypeLabel::String);
        assert!(TypeLabel::String < TypeLabel::Symbol);
    }
}
