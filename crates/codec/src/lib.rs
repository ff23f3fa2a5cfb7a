//! # wireform-codec — wire-format codecs over a format-agnostic value tree
//!
//! This crate is the data-mapping half of wireform: paired parse/format
//! units ([`Codec`]) that convert between raw wire bytes and an in-memory
//! [`Value`] tree of scalars, ordered sequences, and string-keyed mappings.
//!
//! ## Codecs
//!
//! - [`TextCodec`] — `text/plain`, charset (de)coding only
//! - [`JsonCodec`] — `application/json` with native numbers
//! - [`DecimalJsonCodec`] — `application/json` with exact decimal numbers,
//!   for currency-like values that binary floats would corrupt
//! - [`XmlCodec`] — `text/xml` via a schema-less structural converter
//!
//! ## Contracts
//!
//! Every codec is stateless and shared freely across requests. Parsing
//! empty input yields an empty text value; formatting `None`, null, or
//! empty text yields empty output, never a literal `null`. The response
//! `Content-Type` header is always `"{content_type}; charset={charset}"`.
//!
//! ## XML mapping
//!
//! ```ignore
//! use wireform_codec::{Codec, XmlCodec, Value};
//!
//! let codec = XmlCodec::new();
//! let value = codec.parse(b"<root><item>1</item><item>2</item></root>", None)?;
//! // value == {"item": [1, 2]} with exact decimal numbers
//! let bytes = codec.format(Some(&value))?;
//! ```

pub mod charset;
pub mod codec;
pub mod error;
pub mod json;
pub mod text;
pub mod value;
pub mod xml;

pub use codec::Codec;
pub use error::{CodecError, Result};
pub use json::{DecimalJsonCodec, JsonCodec};
pub use text::TextCodec;
pub use value::{Number, Value};
pub use xml::{NumberMode, XmlCodec};
