//! JSON codecs.
//!
//! [`JsonCodec`] maps numbers onto the native JSON repertoire (`i64`/`f64`);
//! [`DecimalJsonCodec`] routes every number through
//! [`rust_decimal::Decimal`] in both directions, so currency-like values
//! survive a round trip exactly instead of picking up binary-float noise.
//! Both format with 4-space indentation and emit non-ASCII characters
//! literally rather than as `\u` escapes.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::charset::{self, DEFAULT_CHARSET};
use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::value::{Number, Value};

/// How parsed JSON numbers are represented in the value tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberRepr {
    Native,
    Decimal,
}

/// The `application/json` codec using native number representations.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    charset: String,
}

impl JsonCodec {
    /// Creates a JSON codec with the default UTF-8 charset.
    pub fn new() -> Self {
        Self::with_charset(DEFAULT_CHARSET)
    }

    /// Creates a JSON codec encoding output in the given charset.
    pub fn with_charset(charset: impl Into<String>) -> Self {
        Self {
            charset: charset.into(),
        }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for JsonCodec {
    fn content_type(&self) -> &str {
        "application/json"
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn parse(&self, raw: &[u8], charset: Option<&str>) -> Result<Value> {
        parse_json(raw, charset.unwrap_or(&self.charset), NumberRepr::Native)
    }

    fn format(&self, payload: Option<&Value>) -> Result<Vec<u8>> {
        format_json(payload, &self.charset)
    }
}

/// The `application/json` codec using exact decimal numbers.
///
/// Identical wire behavior to [`JsonCodec`]; the only difference is that
/// every number, parsed or formatted, is an exact [`Decimal`].
#[derive(Debug, Clone)]
pub struct DecimalJsonCodec {
    charset: String,
}

impl DecimalJsonCodec {
    /// Creates a decimal JSON codec with the default UTF-8 charset.
    pub fn new() -> Self {
        Self::with_charset(DEFAULT_CHARSET)
    }

    /// Creates a decimal JSON codec encoding output in the given charset.
    pub fn with_charset(charset: impl Into<String>) -> Self {
        Self {
            charset: charset.into(),
        }
    }
}

impl Default for DecimalJsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for DecimalJsonCodec {
    fn content_type(&self) -> &str {
        "application/json"
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn parse(&self, raw: &[u8], charset: Option<&str>) -> Result<Value> {
        parse_json(raw, charset.unwrap_or(&self.charset), NumberRepr::Decimal)
    }

    fn format(&self, payload: Option<&Value>) -> Result<Vec<u8>> {
        format_json(payload, &self.charset)
    }
}

fn parse_json(raw: &[u8], charset: &str, repr: NumberRepr) -> Result<Value> {
    if raw.is_empty() {
        return Ok(Value::empty_text());
    }
    let text = charset::decode(raw, charset)?;
    let tree: serde_json::Value = serde_json::from_str(&text)?;
    convert_tree(tree, repr)
}

fn format_json(payload: Option<&Value>, charset: &str) -> Result<Vec<u8>> {
    let Some(value) = payload else {
        return Ok(Vec::new());
    };
    if value.is_empty_payload() {
        return Ok(Vec::new());
    }

    // serde_json writes UTF-8 and leaves non-ASCII characters unescaped,
    // which is exactly the wire contract; only the indent width needs to
    // be overridden.
    let mut out = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(CodecError::unencodable)?;
    let text = String::from_utf8(out).map_err(CodecError::unencodable)?;
    charset::encode(&text, charset)
}

fn convert_tree(tree: serde_json::Value, repr: NumberRepr) -> Result<Value> {
    Ok(match tree {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(value) => Value::Bool(value),
        serde_json::Value::String(text) => Value::Text(text),
        serde_json::Value::Number(number) => Value::Number(convert_number(&number, repr)?),
        serde_json::Value::Array(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| convert_tree(item, repr))
                .collect::<Result<_>>()?,
        ),
        serde_json::Value::Object(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| Ok((key, convert_tree(value, repr)?)))
                .collect::<Result<_>>()?,
        ),
    })
}

fn convert_number(number: &serde_json::Number, repr: NumberRepr) -> Result<Number> {
    match repr {
        NumberRepr::Native => {
            if let Some(value) = number.as_i64() {
                Ok(Number::Int(value))
            } else if let Some(value) = number.as_f64() {
                Ok(Number::Float(value))
            } else {
                Err(CodecError::unparsable(format!(
                    "number out of range: {}",
                    number
                )))
            }
        }
        NumberRepr::Decimal => {
            // With arbitrary_precision enabled the literal digits survive
            // parsing; Decimal sees them before any float conversion.
            let literal = number.to_string();
            Decimal::from_str(&literal)
                .or_else(|_| Decimal::from_scientific(&literal))
                .map(Number::Decimal)
                .map_err(|_| {
                    CodecError::unparsable(format!("number out of range: {}", literal))
                })
        }
    }
}
