//! Reader for JavaScript-like value literals.
//!
//! Accepts the literal forms needed to build every kind of [`Value`]:
//!
//! ```text
//! [undefined, null, true, 1, -2.5e3, NaN, -Infinity, 12n, 'a', "b",
//!  [1, [2]], {a: 1, "b c": 2}, new Date(0), new Date("2020-01-01"),
//!  /ab+c/gi, new Set([1, 2]), new Map([["k", 1]]), Symbol("s"),
//!  function named() {}, () => {}, x => x]
//! ```
//!
//! Function bodies are skipped, not evaluated. Nesting deeper than
//! [`MAX_DEPTH`] is rejected.

use chrono::{DateTime, NaiveDate};
use core_types::Value;
use num_bigint::BigInt;
use regex::Regex;
use thiserror::Error;

const REGEXP_FLAGS: &str = "dgimsuy";

/// Deepest nesting of arrays, objects and constructor calls
pub const MAX_DEPTH: usize = 512;

/// Largest absolute time value a Date can hold, in milliseconds
const MAX_DATE_MS: f64 = 8.64e15;

/// A malformed literal, with the byte offset where reading failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct LiteralError {
    /// Byte offset into the source
    pub offset: usize,
    /// What went wrong
    pub message: String,
}

/// Reads a top-level array literal and returns its elements.
///
/// ```
/// use core_types::Value;
/// use realtype_cli::parse_values;
///
/// let values = parse_values("[1, 'two', null]").unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[2], Value::Null);
/// assert!(parse_values("1").is_err());
/// ```
pub fn parse_values(source: &str) -> Result<Vec<Value>, LiteralError> {
    let mut reader = Reader::new(source);
    reader.skip_ws();
    if reader.peek() != Some('[') {
        return Err(reader.error("expected an array literal"));
    }
    let elements = reader.array_elements()?;
    reader.finish()?;
    Ok(elements)
}

/// Reads a single literal.
pub fn parse_value(source: &str) -> Result<Value, LiteralError> {
    let mut reader = Reader::new(source);
    let value = reader.value()?;
    reader.finish()?;
    Ok(value)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Reader {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_arrow(&mut self) -> bool {
        self.skip_ws();
        if self.src[self.pos..].starts_with("=>") {
            self.pos += 2;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected)))
        }
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn finish(&mut self) -> Result<(), LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!("unexpected '{}' after value", c))),
        }
    }

    fn identifier(&mut self) -> Option<&'a str> {
        let src = self.src;
        let start = self.pos;
        match self.peek() {
            Some(c) if is_ident_start(c) => {
                self.bump();
            }
            _ => return None,
        }
        while matches!(self.peek(), Some(c) if is_ident_part(c)) {
            self.bump();
        }
        Some(&src[start..self.pos])
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = self.nested_value();
        self.depth -= 1;
        value
    }

    fn nested_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('[') => Ok(Value::array_from(self.array_elements()?)),
            Some('{') => self.object(),
            Some(quote @ ('"' | '\'')) => Ok(Value::String(self.string(quote)?)),
            Some('/') => self.regexp(),
            Some('(') => self.arrow_function(),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if is_ident_start(c) => self.word(),
            Some(c) => Err(self.error(format!("unexpected '{}'", c))),
        }
    }

    fn array_elements(&mut self) -> Result<Vec<Value>, LiteralError> {
        self.expect('[')?;
        let mut elements = Vec::new();
        loop {
            if self.eat(']') {
                return Ok(elements);
            }
            elements.push(self.value()?);
            if !self.eat(',') {
                self.expect(']')?;
                return Ok(elements);
            }
        }
    }

    fn object(&mut self) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut properties: Vec<(String, Value)> = Vec::new();
        loop {
            if self.eat('}') {
                break;
            }
            let key = self.property_key()?;
            self.expect(':')?;
            let value = self.value()?;
            // A repeated key keeps its first position and takes the last value
            match properties.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => properties.push((key, value)),
            }
            if !self.eat(',') {
                self.expect('}')?;
                break;
            }
        }
        Ok(Value::object_from(properties))
    }

    fn property_key(&mut self) -> Result<String, LiteralError> {
        self.skip_ws();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.string(quote),
            Some(c) if c.is_ascii_digit() => {
                let src = self.src;
                let start = self.pos;
                self.digits();
                Ok(src[start..self.pos].to_string())
            }
            _ => self
                .identifier()
                .map(str::to_string)
                .ok_or_else(|| self.error("expected property name")),
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        let start = self.pos;
        let unterminated = || LiteralError {
            offset: start,
            message: "unterminated string".to_string(),
        };
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(unterminated()),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    let escape_at = self.pos - 1;
                    match self.bump() {
                        None => return Err(unterminated()),
                        Some('n') => out.push('\n'),
                        Some('t') => out.push('\t'),
                        Some('r') => out.push('\r'),
                        Some('b') => out.push('\u{8}'),
                        Some('f') => out.push('\u{c}'),
                        Some('v') => out.push('\u{b}'),
                        Some('0') => out.push('\0'),
                        Some('u') => out.push(self.unicode_escape(escape_at)?),
                        // Line continuation
                        Some('\n') => {}
                        Some(other) => out.push(other),
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn unicode_escape(&mut self, escape_at: usize) -> Result<char, LiteralError> {
        let invalid = || LiteralError {
            offset: escape_at,
            message: "invalid unicode escape".to_string(),
        };
        let hex: String = if self.peek() == Some('{') {
            self.bump();
            let mut hex = String::new();
            loop {
                match self.bump() {
                    Some('}') => break,
                    Some(c) => hex.push(c),
                    None => return Err(invalid()),
                }
            }
            hex
        } else {
            (0..4).filter_map(|_| self.bump()).collect()
        };
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid)
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let src = self.src;
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };

        if matches!(self.peek(), Some(c) if is_ident_start(c)) {
            let word_at = self.pos;
            return match self.identifier() {
                Some("Infinity") if negative => Ok(Value::Double(f64::NEG_INFINITY)),
                Some("Infinity") => Ok(Value::Double(f64::INFINITY)),
                Some("NaN") => Ok(Value::Double(f64::NAN)),
                _ => Err(LiteralError {
                    offset: word_at,
                    message: "expected a number".to_string(),
                }),
            };
        }

        let digits_start = self.pos;
        let mut is_integer = true;
        let mut mantissa_digits = self.digits();
        if self.peek() == Some('.') {
            self.bump();
            is_integer = false;
            mantissa_digits += self.digits();
        }
        if mantissa_digits == 0 {
            return Err(self.error("expected digits"));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            is_integer = false;
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.digits() == 0 {
                return Err(self.error("expected exponent digits"));
            }
        }
        let text = &src[digits_start..self.pos];

        if self.peek() == Some('n') {
            if !is_integer {
                return Err(self.error("BigInt literal must be an integer"));
            }
            self.bump();
            let magnitude: BigInt = text.parse().map_err(|_| LiteralError {
                offset: start,
                message: format!("invalid BigInt '{}'", text),
            })?;
            return Ok(Value::BigInt(if negative { -magnitude } else { magnitude }));
        }
        if matches!(self.peek(), Some(c) if is_ident_part(c)) {
            return Err(self.error("unexpected character after number"));
        }

        let magnitude: f64 = text.parse().map_err(|_| LiteralError {
            offset: start,
            message: format!("invalid number '{}'", text),
        })?;
        Ok(Value::number(if negative { -magnitude } else { magnitude }))
    }

    fn word(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let word = self.identifier().unwrap_or_default();
        match word {
            "undefined" => Ok(Value::Undefined),
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            "NaN" => Ok(Value::Double(f64::NAN)),
            "Infinity" => Ok(Value::Double(f64::INFINITY)),
            "new" => self.construct(),
            "Symbol" => self.symbol(),
            "function" => self.function(),
            // Single-parameter arrow function: `x => x`
            _ if self.src[self.pos..].trim_start().starts_with("=>") => {
                self.eat_arrow();
                self.arrow_body()?;
                Ok(Value::function(None))
            }
            _ => Err(LiteralError {
                offset: start,
                message: format!("unknown identifier '{}'", word),
            }),
        }
    }

    fn call_argument(&mut self) -> Result<Option<Value>, LiteralError> {
        self.expect('(')?;
        if self.eat(')') {
            return Ok(None);
        }
        let arg = self.value()?;
        self.eat(',');
        self.expect(')')?;
        Ok(Some(arg))
    }

    fn construct(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        let start = self.pos;
        let name = self
            .identifier()
            .ok_or_else(|| self.error("expected constructor name"))?;
        let arg = self.call_argument()?;
        log::trace!("constructing {} at offset {}", name, start);
        match name {
            "Date" => Ok(Value::date(date_time(arg.as_ref()))),
            "Set" => Ok(Value::set_from(iterate(arg, start)?)),
            "Map" => {
                let entries = iterate(arg, start)?
                    .into_iter()
                    .map(|item| map_entry(&item, start))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::map_from(entries))
            }
            "Object" if arg.is_none() => Ok(Value::object()),
            "Array" if arg.is_none() => Ok(Value::array()),
            _ => Err(LiteralError {
                offset: start,
                message: format!("unsupported constructor '{}'", name),
            }),
        }
    }

    fn symbol(&mut self) -> Result<Value, LiteralError> {
        let description = match self.call_argument()? {
            None | Some(Value::Undefined) => None,
            Some(arg) => Some(arg.to_string()),
        };
        Ok(Value::symbol(description.as_deref()))
    }

    fn function(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        let name = self.identifier();
        self.skip_balanced('(', ')')?;
        self.skip_balanced('{', '}')?;
        Ok(Value::function(name))
    }

    fn arrow_function(&mut self) -> Result<Value, LiteralError> {
        self.skip_balanced('(', ')')?;
        if !self.eat_arrow() {
            return Err(self.error("expected '=>'"));
        }
        self.arrow_body()?;
        Ok(Value::function(None))
    }

    fn arrow_body(&mut self) -> Result<(), LiteralError> {
        self.skip_ws();
        if self.peek() == Some('{') {
            return self.skip_balanced('{', '}');
        }
        // Expression body: skip to the next top-level separator
        let start = self.pos;
        loop {
            match self.peek() {
                None | Some(',' | ')' | ']' | '}') => break,
                Some('(') => self.skip_balanced('(', ')')?,
                Some('[') => self.skip_balanced('[', ']')?,
                Some('{') => self.skip_balanced('{', '}')?,
                Some(quote @ ('"' | '\'' | '`')) => {
                    self.string(quote)?;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        if self.src[start..self.pos].trim().is_empty() {
            return Err(self.error("expected function body"));
        }
        Ok(())
    }

    fn skip_balanced(&mut self, open: char, close: char) -> Result<(), LiteralError> {
        self.skip_ws();
        let start = self.pos;
        self.expect(open)?;
        let mut depth = 1;
        while depth > 0 {
            match self.peek() {
                None => {
                    return Err(LiteralError {
                        offset: start,
                        message: format!("unclosed '{}'", open),
                    })
                }
                Some(quote @ ('"' | '\'' | '`')) => {
                    self.string(quote)?;
                }
                Some(c) => {
                    self.bump();
                    if c == open {
                        depth += 1;
                    } else if c == close {
                        depth -= 1;
                    }
                }
            }
        }
        Ok(())
    }

    fn regexp(&mut self) -> Result<Value, LiteralError> {
        let src = self.src;
        let start = self.pos;
        let unterminated = || LiteralError {
            offset: start,
            message: "unterminated regular expression".to_string(),
        };
        self.bump();
        let body_start = self.pos;
        let mut in_class = false;
        loop {
            match self.bump() {
                None | Some('\n') => return Err(unterminated()),
                Some('\\') => {
                    if self.bump().is_none() {
                        return Err(unterminated());
                    }
                }
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('/') if !in_class => break,
                Some(_) => {}
            }
        }
        let source = &src[body_start..self.pos - 1];
        if source.is_empty() {
            return Err(LiteralError {
                offset: start,
                message: "empty regular expression".to_string(),
            });
        }

        let flags_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.bump();
        }
        let flags = &src[flags_start..self.pos];
        for (idx, flag) in flags.char_indices() {
            if !REGEXP_FLAGS.contains(flag) || flags[..idx].contains(flag) {
                return Err(LiteralError {
                    offset: flags_start + idx,
                    message: format!("invalid regular expression flag '{}'", flag),
                });
            }
        }

        if let Err(err) = Regex::new(source) {
            let detail = err.to_string();
            let reason = detail.lines().last().unwrap_or_default().trim().to_string();
            return Err(LiteralError {
                offset: body_start,
                message: format!("invalid regular expression: {}", reason),
            });
        }
        Ok(Value::regexp(source, flags))
    }
}

/// Time value for `new Date(arg)`.
fn date_time(arg: Option<&Value>) -> f64 {
    let time = match arg {
        None => chrono::Utc::now().timestamp_millis() as f64,
        Some(Value::String(text)) => parse_date(text).unwrap_or(f64::NAN),
        Some(Value::Date(date)) => date.time,
        Some(Value::Null) => 0.0,
        Some(Value::Boolean(b)) => f64::from(u8::from(*b)),
        Some(other) => other.as_number().unwrap_or(f64::NAN),
    };
    if time.is_finite() && time.abs() <= MAX_DATE_MS {
        time.trunc()
    } else {
        f64::NAN
    }
}

fn parse_date(text: &str) -> Option<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis() as f64);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

/// Elements produced by iterating a constructor argument.
fn iterate(arg: Option<Value>, at: usize) -> Result<Vec<Value>, LiteralError> {
    match arg {
        None | Some(Value::Undefined) | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(arr)) => Ok(arr.elements.clone()),
        Some(Value::Set(set)) => Ok(set.values.clone()),
        Some(Value::String(text)) => Ok(text.chars().map(|c| Value::String(c.to_string())).collect()),
        Some(other) => Err(LiteralError {
            offset: at,
            message: format!("{} is not iterable", other.inspect()),
        }),
    }
}

fn map_entry(item: &Value, at: usize) -> Result<(Value, Value), LiteralError> {
    match item.as_array() {
        Some(pair) => {
            let key = pair.first().cloned().unwrap_or(Value::Undefined);
            let value = pair.get(1).cloned().unwrap_or(Value::Undefined);
            Ok((key, value))
        }
        None => Err(LiteralError {
            offset: at,
            message: format!("iterator value {} is not an entry", item.inspect()),
        }),
    }
}
