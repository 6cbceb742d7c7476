//! Type labels produced by value classification.
//!
//! A [`TypeLabel`] is one of a closed set of sixteen tags. The first eight
//! mirror the JavaScript `typeof` operator ("basic" labels); the rest refine
//! `number` and `object` into their special cases ("real" labels).

use crate::error::UnknownTypeLabel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A runtime type tag.
///
/// Ordering follows the ordinary string ordering of the tag text, so
/// uppercase tags (`Infinity`, `NaN`) sort before lowercase ones.
///
/// # Examples
///
/// ```
/// use core_types::TypeLabel;
///
/// assert_eq!(TypeLabel::NaN.as_str(), "NaN");
/// assert!(TypeLabel::Infinity < TypeLabel::Array);
/// assert_eq!("regexp".parse::<TypeLabel>().unwrap(), TypeLabel::RegExp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLabel {
    /// `boolean`
    #[serde(rename = "boolean")]
    Boolean,
    /// `number`
    #[serde(rename = "number")]
    Number,
    /// `string`
    #[serde(rename = "string")]
    String,
    /// `object`
    #[serde(rename = "object")]
    Object,
    /// `function`
    #[serde(rename = "function")]
    Function,
    /// `undefined`
    #[serde(rename = "undefined")]
    Undefined,
    /// `symbol`
    #[serde(rename = "symbol")]
    Symbol,
    /// `bigint`
    #[serde(rename = "bigint")]
    BigInt,
    /// `array`
    #[serde(rename = "array")]
    Array,
    /// `null`
    #[serde(rename = "null")]
    Null,
    /// `NaN`
    #[serde(rename = "NaN")]
    NaN,
    /// `Infinity`
    #[serde(rename = "Infinity")]
    Infinity,
    /// `date`
    #[serde(rename = "date")]
    Date,
    /// `regexp`
    #[serde(rename = "regexp")]
    RegExp,
    /// `set`
    #[serde(rename = "set")]
    Set,
    /// `map`
    #[serde(rename = "map")]
    Map,
}

impl TypeLabel {
    /// Every label, basic labels first.
    pub const ALL: [TypeLabel; 16] = [
        TypeLabel::Boolean,
        TypeLabel::Number,
        TypeLabel::String,
        TypeLabel::Object,
        TypeLabel::Function,
        TypeLabel::Undefined,
        TypeLabel::Symbol,
        TypeLabel::BigInt,
        TypeLabel::Array,
        TypeLabel::Null,
        TypeLabel::NaN,
        TypeLabel::Infinity,
        TypeLabel::Date,
        TypeLabel::RegExp,
        TypeLabel::Set,
        TypeLabel::Map,
    ];

    /// Returns the tag text.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeLabel::Boolean => "boolean",
            TypeLabel::Number => "number",
            TypeLabel::String => "string",
            TypeLabel::Object => "object",
            TypeLabel::Function => "function",
            TypeLabel::Undefined => "undefined",
            TypeLabel::Symbol => "symbol",
            TypeLabel::BigInt => "bigint",
            TypeLabel::Array => "array",
            TypeLabel::Null => "null",
            TypeLabel::NaN => "NaN",
            TypeLabel::Infinity => "Infinity",
            TypeLabel::Date => "date",
            TypeLabel::RegExp => "regexp",
            TypeLabel::Set => "set",
            TypeLabel::Map => "map",
        }
    }

    /// Whether this is one of the eight `typeof` labels.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            TypeLabel::Boolean
                | TypeLabel::Number
                | TypeLabel::String
                | TypeLabel::Object
                | TypeLabel::Function
                | TypeLabel::Undefined
                | TypeLabel::Symbol
                | TypeLabel::BigInt
        )
    }

    /// Returns the basic label this label refines.
    ///
    /// ```
    /// use core_types::TypeLabel;
    ///
    /// assert_eq!(TypeLabel::NaN.basic_parent(), TypeLabel::Number);
    /// assert_eq!(TypeLabel::Null.basic_parent(), TypeLabel::Object);
    /// assert_eq!(TypeLabel::String.basic_parent(), TypeLabel::String);
    /// ```
    pub fn basic_parent(self) -> TypeLabel {
        match self {
            TypeLabel::NaN | TypeLabel::Infinity => TypeLabel::Number,
            TypeLabel::Array
            | TypeLabel::Null
            | TypeLabel::Date
            | TypeLabel::RegExp
            | TypeLabel::Set
            | TypeLabel::Map => TypeLabel::Object,
            basic => basic,
        }
    }
}

impl PartialOrd for TypeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeLabel {
    type Err = UnknownTypeLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownTypeLabel(s.to_string()))
    }
}
