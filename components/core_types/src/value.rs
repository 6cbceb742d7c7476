//! JavaScript value representation.
//!
//! This module provides the core `Value` enum. Primitives are stored
//! inline; object-category values and symbols are reference values held
//! behind `Rc`, so strict equality on them is identity, as with `===`.

use crate::label::TypeLabel;
use num_bigint::BigInt;
use std::fmt;
use std::rc::Rc;

/// Internal object data: own enumerable properties in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    /// Property entries
    pub properties: Vec<(String, Value)>,
}

/// Internal array data
#[derive(Debug, Clone, Default)]
pub struct ArrayData {
    /// Array elements
    pub elements: Vec<Value>,
}

/// Internal map data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct MapData {
    /// Map entries in insertion order
    pub entries: Vec<(Value, Value)>,
}

/// Internal set data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct SetData {
    /// Set values in insertion order
    pub values: Vec<Value>,
}

/// Internal date data
#[derive(Debug, Clone)]
pub struct DateData {
    /// Milliseconds since the Unix epoch; NaN for an invalid date
    pub time: f64,
}

/// Internal regular expression data
#[derive(Debug, Clone)]
pub struct RegExpData {
    /// Pattern source, without delimiting slashes
    pub source: String,
    /// Flags string
    pub flags: String,
}

/// Internal function data
#[derive(Debug, Clone)]
pub struct FunctionData {
    /// Function name, `None` for anonymous functions
    pub name: Option<String>,
}

/// Internal symbol data
#[derive(Debug, Clone)]
pub struct SymbolData {
    /// Optional description for debugging
    pub description: Option<String>,
}

/// Represents any JavaScript value.
///
/// Numbers have two representations: `Smi` for small integers and `Double`
/// for everything else. Both are the same JavaScript type and compare
/// numerically.
///
/// # Examples
///
/// ```
/// use core_types::{TypeLabel, Value};
///
/// let number = Value::Smi(42);
/// let list = Value::array_from(vec![Value::Null, Value::string("x")]);
///
/// assert_eq!(number.type_of(), TypeLabel::Number);
/// assert_eq!(list.type_of(), TypeLabel::Object);
/// assert_eq!(list.inspect(), "[ null, 'x' ]");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(String),
    /// Symbol, unique by identity
    Symbol(Rc<SymbolData>),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Plain object with properties
    Object(Rc<ObjectData>),
    /// Array
    Array(Rc<ArrayData>),
    /// Map collection
    Map(Rc<MapData>),
    /// Set collection
    Set(Rc<SetData>),
    /// Date object
    Date(Rc<DateData>),
    /// RegExp object
    RegExp(Rc<RegExpData>),
    /// Function object
    Function(Rc<FunctionData>),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a number value, using `Smi` when the number is a small
    /// integer (negative zero stays a `Double`).
    pub fn number(n: f64) -> Self {
        let is_small_int = n.fract() == 0.0
            && n >= i32::MIN as f64
            && n <= i32::MAX as f64
            && !(n == 0.0 && n.is_sign_negative());
        if is_small_int {
            Value::Smi(n as i32)
        } else {
            Value::Double(n)
        }
    }

    /// Create a new unique symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Rc::new(SymbolData {
            description: description.map(str::to_string),
        }))
    }

    /// Create an empty object
    pub fn object() -> Self {
        Value::Object(Rc::new(ObjectData::default()))
    }

    /// Create an object from property entries
    pub fn object_from(properties: Vec<(String, Value)>) -> Self {
        Value::Object(Rc::new(ObjectData { properties }))
    }

    /// Create an empty array
    pub fn array() -> Self {
        Value::Array(Rc::new(ArrayData::default()))
    }

    /// Create an array from values
    pub fn array_from(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(ArrayData { elements }))
    }

    /// Create a Map from entries.
    ///
    /// A repeated key keeps its first position and takes the last value,
    /// with keys compared by SameValueZero.
    pub fn map_from(entries: Vec<(Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match unique.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(entry) => entry.1 = value,
                None => unique.push((key, value)),
            }
        }
        Value::Map(Rc::new(MapData { entries: unique }))
    }

    /// Create a Set from values, dropping SameValueZero duplicates.
    pub fn set_from(values: Vec<Value>) -> Self {
        let mut unique: Vec<Value> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.iter().any(|v| v.same_value_zero(&value)) {
                unique.push(value);
            }
        }
        Value::Set(Rc::new(SetData { values: unique }))
    }

    /// Create a Date from milliseconds since the epoch
    pub fn date(time: f64) -> Self {
        Value::Date(Rc::new(DateData { time }))
    }

    /// Create a RegExp from its source and flags
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Rc::new(RegExpData {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    /// Create a function value
    pub fn function(name: Option<&str>) -> Self {
        Value::Function(Rc::new(FunctionData {
            name: name.map(str::to_string),
        }))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is a number (Smi or Double)
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Smi(_) | Value::Double(_))
    }

    /// Returns the numeric value of a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements of an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(&arr.elements),
            _ => None,
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// - undefined → `undefined`
    /// - null → `object` (historical quirk)
    /// - Smi or Double, including NaN and ±Infinity → `number`
    /// - functions → `function`
    /// - every other reference value → `object`
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{TypeLabel, Value};
    ///
    /// assert_eq!(Value::Undefined.type_of(), TypeLabel::Undefined);
    /// assert_eq!(Value::Null.type_of(), TypeLabel::Object);
    /// assert_eq!(Value::Double(f64::NAN).type_of(), TypeLabel::Number);
    /// assert_eq!(Value::function(None).type_of(), TypeLabel::Function);
    /// ```
    pub fn type_of(&self) -> TypeLabel {
        match self {
            Value::Undefined => TypeLabel::Undefined,
            Value::Null => TypeLabel::Object, // JavaScript quirk
            Value::Boolean(_) => TypeLabel::Boolean,
            Value::Smi(_) | Value::Double(_) => TypeLabel::Number,
            Value::String(_) => TypeLabel::String,
            Value::Symbol(_) => TypeLabel::Symbol,
            Value::BigInt(_) => TypeLabel::BigInt,
            Value::Function(_) => TypeLabel::Function,
            Value::Object(_)
            | Value::Array(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::Date(_)
            | Value::RegExp(_) => TypeLabel::Object,
        }
    }

    /// Strict equality (`===`).
    ///
    /// Numbers compare numerically across representations and NaN is never
    /// equal to anything. Symbols and reference values compare by identity.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(Value::Smi(1).strict_equals(&Value::Double(1.0)));
    /// assert!(!Value::Double(f64::NAN).strict_equals(&Value::Double(f64::NAN)));
    /// assert!(!Value::object().strict_equals(&Value::object()));
    /// ```
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            // Reference types - same instance only
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// SameValueZero comparison for Map/Set key equality
    ///
    /// Like `strict_equals` but treats NaN as equal to NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }

    /// Renders the value the way a console shows it: strings quoted,
    /// containers expanded.
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// let nested = Value::array_from(vec![
    ///     Value::string("boolean"),
    ///     Value::Smi(3),
    ///     Value::array(),
    /// ]);
    /// assert_eq!(nested.inspect(), "[ 'boolean', 3, [] ]");
    /// assert_eq!(Value::object().inspect(), "{}");
    /// ```
    pub fn inspect(&self) -> String {
        match self {
            Value::String(s) => quote(s),
            Value::Double(n) if *n == 0.0 && n.is_sign_negative() => "-0".to_string(),
            Value::Symbol(sym) => format!(
                "Symbol({})",
                escape(sym.description.as_deref().unwrap_or(""))
            ),
            Value::Array(arr) => {
                if arr.elements.is_empty() {
                    "[]".to_string()
                } else {
                    format!("[ {} ]", join_inspected(arr.elements.iter()))
                }
            }
            Value::Object(obj) => {
                if obj.properties.is_empty() {
                    "{}".to_string()
                } else {
                    let props: Vec<String> = obj
                        .properties
                        .iter()
                        .map(|(k, v)| format!("{}: {}", property_key(k), v.inspect()))
                        .collect();
                    format!("{{ {} }}", props.join(", "))
                }
            }
            Value::Map(map) => {
                if map.entries.is_empty() {
                    "Map(0) {}".to_string()
                } else {
                    let entries: Vec<String> = map
                        .entries
                        .iter()
                        .map(|(k, v)| format!("{} => {}", k.inspect(), v.inspect()))
                        .collect();
                    format!("Map({}) {{ {} }}", map.entries.len(), entries.join(", "))
                }
            }
            Value::Set(set) => {
                if set.values.is_empty() {
                    "Set(0) {}".to_string()
                } else {
                    format!(
                        "Set({}) {{ {} }}",
                        set.values.len(),
                        join_inspected(set.values.iter())
                    )
                }
            }
            Value::Function(func) => match &func.name {
                Some(name) => format!("[Function: {}]", escape(name)),
                None => "[Function (anonymous)]".to_string(),
            },
            other => other.to_string(),
        }
    }
}

fn join_inspected<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values.map(Value::inspect).collect::<Vec<_>>().join(", ")
}

fn quote(s: &str) -> String {
    format!("'{}'", escape(s))
}

/// Escapes quotes, backslashes and control characters so the text stays
/// on one line.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04x}", c as u32))
            }
            c => out.push(c),
        }
    }
    out
}

fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .map(|c| c.is_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false)
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

fn symbol_text(sym: &SymbolData) -> String {
    format!("Symbol({})", sym.description.as_deref().unwrap_or(""))
}

/// Formats a number following JavaScript's `String()` rules for the
/// common cases.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn format_date(time: f64) -> String {
    if !time.is_finite() {
        return "Invalid Date".to_string();
    }
    chrono::DateTime::from_timestamp_millis(time as i64)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Implementation of Display trait for JavaScript string conversion.
///
/// This follows JavaScript's `String()` conversion rules:
/// - undefined → "undefined"
/// - null → "null"
/// - number → decimal representation, `NaN`, `Infinity`
/// - array → elements joined with commas
/// - date → ISO 8601 timestamp or `Invalid Date`
/// - other objects → `[object Tag]`
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
/// assert_eq!(Value::date(0.0).to_string(), "1970-01-01T00:00:00.000Z");
/// assert_eq!(Value::regexp("a+b", "gi").to_string(), "/a+b/gi");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Smi(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", symbol_text(sym)),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Array(arr) => {
                let parts: Vec<String> = arr
                    .elements
                    .iter()
                    .map(|e| match e {
                        Value::Undefined | Value::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(","))
            }
            Value::Map(_) => write!(f, "[object Map]"),
            Value::Set(_) => write!(f, "[object Set]"),
            Value::Date(date) => write!(f, "{}", format_date(date.time)),
            Value::RegExp(re) => write!(f, "/{}/{}", re.source, re.flags),
            Value::Function(func) => write!(
                f,
                "function {}() {{ [native code] }}",
                func.name.as_deref().unwrap_or("")
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<TypeLabel> for Value {
    fn from(label: TypeLabel) -> Self {
        Value::String(label.as_str().to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array_from(elements)
    }
}
