//! The format-agnostic value tree exchanged with codecs.
//!
//! [`Value`] is the in-memory representation every codec parses into and
//! formats from: scalars, ordered sequences, and string-keyed mappings.
//! Mapping key order is not significant, so entries live in a `BTreeMap`
//! (the same choice `serde_json` makes for its map type).
//!
//! Numbers carry their representation explicitly. [`Number::Int`] and
//! [`Number::Float`] mirror the native JSON repertoire so integer literals
//! round-trip byte-exactly; [`Number::Decimal`] is the arbitrary-precision
//! form required by the decimal JSON codec and the XML leaf coercion, where
//! `10.10` must stay exactly `10.10`.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::ser::{Serialize, Serializer};

/// A numeric scalar in one of three representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// A signed integer, as parsed from a JSON integer literal.
    Int(i64),
    /// A binary floating-point number.
    Float(f64),
    /// An exact decimal, preserving scale (`10.10`, not `10.1`).
    Decimal(Decimal),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
            Number::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// The universal in-memory value exchanged with codecs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A text scalar.
    Text(String),
    /// A numeric scalar.
    Number(Number),
    /// An ordered sequence; may contain duplicates.
    Sequence(Vec<Value>),
    /// A mapping with unique, identifier-like string keys.
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// An empty text value, the parse result for empty input.
    pub fn empty_text() -> Self {
        Value::Text(String::new())
    }

    /// Returns the text content if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number` value.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the items if this is a `Sequence` value.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Mapping` value.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// True for `Null` and for empty `Text` — the payloads every codec
    /// formats to an empty output.
    pub fn is_empty_payload(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Text(text) => serializer.serialize_str(text),
            Value::Number(Number::Int(value)) => serializer.serialize_i64(*value),
            Value::Number(Number::Float(value)) => serializer.serialize_f64(*value),
            // rust_decimal's serde-with-arbitrary-precision impl emits the
            // exact digits when the target serializer is serde_json.
            Value::Number(Number::Decimal(value)) => {
                rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
            }
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(entries) => serializer.collect_map(entries),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(Number::Decimal(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(30).to_string(), "30");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Decimal(dec!(10.10)).to_string(), "10.10");
    }

    #[test]
    fn test_empty_payload() {
        assert!(Value::Null.is_empty_payload());
        assert!(Value::empty_text().is_empty_payload());
        assert!(!Value::Text("x".to_string()).is_empty_payload());
        assert!(!Value::from(0i64).is_empty_payload());
    }

    #[test]
    fn test_mapping_from_array() {
        let value = Value::from([("name", Value::from("Alice")), ("age", Value::from(30i64))]);
        let entries = value.as_mapping().unwrap();
        assert_eq!(entries["name"], Value::from("Alice"));
        assert_eq!(entries["age"], Value::from(30i64));
    }

    #[test]
    fn test_decimal_preserves_scale() {
        let value = Value::from(dec!(10.10));
        assert_eq!(value.as_number().unwrap().to_string(), "10.10");
    }
}
