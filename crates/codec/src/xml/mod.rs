//! XML codec and the schema-less structural converter behind it.
//!
//! XML has no native notion of sequences or numbers, so the mapping here is
//! structural: element nesting becomes mappings, repeated sibling elements
//! become sequences, and leaf text is coerced to a number when it parses as
//! one (see [`NumberMode`]). The converse direction wraps sequences in
//! `{key}_item` elements and everything in a single configurable root.
//!
//! The converter lives in [`de`] and [`ser`]; [`XmlCodec`] wires it into
//! the [`Codec`] contract, wrapping output in the root element and
//! unwrapping the single root entry on parse.

pub mod de;
pub mod ser;

use crate::charset::{self, DEFAULT_CHARSET};
use crate::codec::Codec;
use crate::error::{CodecError, Result};
use crate::value::Value;

pub use de::from_xml;
pub use ser::to_xml;

/// The default root element name.
pub const DEFAULT_ROOT: &str = "root";

/// How leaf text is coerced into numbers during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Exact decimal coercion; text that fails to parse stays text.
    #[default]
    Decimal,
    /// Native coercion: `i64` first, then `f64`.
    Basic,
    /// No coercion; every leaf stays text.
    Off,
}

/// The `text/xml` codec.
#[derive(Debug, Clone)]
pub struct XmlCodec {
    charset: String,
    root: String,
    numbers: NumberMode,
}

impl XmlCodec {
    /// Creates an XML codec with the default root element and UTF-8 charset.
    pub fn new() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            root: DEFAULT_ROOT.to_string(),
            numbers: NumberMode::default(),
        }
    }

    /// Sets the root element name used for formatting.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the output charset.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets the leaf number coercion mode.
    pub fn with_number_mode(mut self, numbers: NumberMode) -> Self {
        self.numbers = numbers;
        self
    }
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for XmlCodec {
    fn content_type(&self) -> &str {
        "text/xml"
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn parse(&self, raw: &[u8], charset: Option<&str>) -> Result<Value> {
        if raw.is_empty() {
            return Ok(Value::empty_text());
        }
        let text = charset::decode(raw, charset.unwrap_or(&self.charset))?;
        let document = de::from_xml(&text, self.numbers)?;
        // The converter returns a single-entry mapping keyed by the root
        // element's name; callers get the content under that key.
        let Value::Mapping(entries) = document else {
            return Err(CodecError::unparsable("document has no root element"));
        };
        entries
            .into_values()
            .next()
            .ok_or_else(|| CodecError::unparsable("document has no root element"))
    }

    fn format(&self, payload: Option<&Value>) -> Result<Vec<u8>> {
        let Some(value) = payload else {
            return Ok(Vec::new());
        };
        if value.is_empty_payload() {
            return Ok(Vec::new());
        }
        ser::to_xml(value, &self.root, &self.charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_unwraps_root() {
        let codec = XmlCodec::new();
        let value = codec.parse(b"<root><age>30</age></root>", None).unwrap();
        assert_eq!(value, Value::from([("age", Value::from(dec!(30)))]));
    }

    #[test]
    fn test_parse_unwraps_foreign_root_name() {
        let codec = XmlCodec::new();
        let value = codec.parse(b"<user><age>30</age></user>", None).unwrap();
        assert_eq!(value, Value::from([("age", Value::from(dec!(30)))]));
    }

    #[test]
    fn test_parse_empty_yields_empty_text() {
        let codec = XmlCodec::new();
        assert_eq!(codec.parse(b"", None).unwrap(), Value::empty_text());
    }

    #[test]
    fn test_format_wraps_in_configured_root() {
        let codec = XmlCodec::new().with_root("envelope");
        let out = codec.format(Some(&Value::from("x"))).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<envelope>x</envelope>"));
    }

    #[test]
    fn test_format_empty_is_empty() {
        let codec = XmlCodec::new();
        assert!(codec.format(None).unwrap().is_empty());
        assert!(codec.format(Some(&Value::Null)).unwrap().is_empty());
    }

    #[test]
    fn test_content_type_header() {
        let codec = XmlCodec::new();
        assert_eq!(codec.content_type_header(), "text/xml; charset=utf-8");
    }

    #[test]
    fn test_malformed_document_is_bad_request_shaped() {
        let codec = XmlCodec::new();
        let err = codec.parse(b"<root><a></root>", None).unwrap_err();
        assert!(err.to_string().starts_with("unable to parse data"));
    }
}
