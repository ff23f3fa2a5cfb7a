//! The [`Codec`] trait: one paired parse/format unit per wire format.
//!
//! A codec is constructed once at startup, registered, and then shared
//! across requests; implementations must be stateless (`parse` and `format`
//! take `&self` and touch no shared mutable state).

use std::fmt;

use crate::charset;
use crate::error::Result;
use crate::value::Value;

/// A bidirectional mapping between one wire format and [`Value`].
pub trait Codec: Send + Sync + fmt::Debug {
    /// The canonical content type this codec produces, without parameters.
    fn content_type(&self) -> &str;

    /// The charset this codec encodes output in.
    fn charset(&self) -> &str {
        charset::DEFAULT_CHARSET
    }

    /// Parses raw body bytes into a [`Value`].
    ///
    /// `charset` overrides the codec's configured charset when the request
    /// declared one. Empty input yields an empty text value, not an error.
    fn parse(&self, raw: &[u8], charset: Option<&str>) -> Result<Value>;

    /// Formats a payload into wire bytes.
    ///
    /// `None`, `Value::Null`, and empty text all format to an empty output
    /// — never a literal `null`.
    fn format(&self, payload: Option<&Value>) -> Result<Vec<u8>>;

    /// The full `Content-Type` header value for responses from this codec.
    fn content_type_header(&self) -> String {
        format!("{}; charset={}", self.content_type(), self.charset())
    }
}

/// True when `payload` is one of the inputs that formats to empty output.
pub(crate) fn is_empty_payload(payload: Option<&Value>) -> bool {
    match payload {
        None => true,
        Some(value) => value.is_empty_payload(),
    }
}
