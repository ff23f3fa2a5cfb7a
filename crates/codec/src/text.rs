//! Plain-text codec: identity passthrough with charset (de)coding only.

use crate::charset::{self, DEFAULT_CHARSET};
use crate::codec::{Codec, is_empty_payload};
use crate::error::{CodecError, Result};
use crate::value::Value;

/// The `text/plain` codec.
///
/// Parsing decodes the body into a single text scalar; formatting renders
/// scalars through their display form. Sequences and mappings have no
/// plain-text representation and are rejected.
#[derive(Debug, Clone)]
pub struct TextCodec {
    charset: String,
}

impl TextCodec {
    /// Creates a plain-text codec with the default UTF-8 charset.
    pub fn new() -> Self {
        Self::with_charset(DEFAULT_CHARSET)
    }

    /// Creates a plain-text codec encoding output in the given charset.
    pub fn with_charset(charset: impl Into<String>) -> Self {
        Self {
            charset: charset.into(),
        }
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for TextCodec {
    fn content_type(&self) -> &str {
        "text/plain"
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn parse(&self, raw: &[u8], charset: Option<&str>) -> Result<Value> {
        if raw.is_empty() {
            return Ok(Value::empty_text());
        }
        let text = charset::decode(raw, charset.unwrap_or(&self.charset))?;
        Ok(Value::Text(text))
    }

    fn format(&self, payload: Option<&Value>) -> Result<Vec<u8>> {
        if is_empty_payload(payload) {
            return Ok(Vec::new());
        }
        let rendered = match payload {
            Some(Value::Text(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(value)) => value.to_string(),
            _ => {
                return Err(CodecError::unencodable(
                    "plain text cannot represent sequences or mappings",
                ));
            }
        };
        charset::encode(&rendered, &self.charset)
    }
}
