//! # wireform-rest — content negotiation over the wireform codecs
//!
//! This crate decides which wire format applies to a request and drives the
//! matching codec from `wireform-codec`. It is framework-agnostic: requests
//! are consumed through the [`InboundRequest`] trait's observable fields
//! (headers, query parameters, path, body) and responses are produced as a
//! [`FormattedResponse`] the hosting layer copies into its own types.
//!
//! ## Negotiation precedence
//!
//! Selecting a parser (inbound):
//!
//! 1. `Content-Type` header (charset parameter ignored)
//! 2. `format` query parameter (e.g. `?format=json`)
//! 3. filename-style extension in the path (e.g. `/user.json`)
//!
//! Selecting a formatter (outbound):
//!
//! 1. `format` query parameter / path extension
//! 2. first acceptable entry of the `Accept` header that is registered
//!
//! No signal at all falls back to the configured default codec; an explicit
//! unknown name fails with [`Error::NotAcceptable`].
//!
//! ## Quick start
//!
//! ```
//! use wireform_rest::{CodecRegistry, RequestParts, ResponseEnvelope};
//! use wireform_codec::Value;
//!
//! let registry = CodecRegistry::with_defaults();
//!
//! let request = RequestParts::new("/users").with_query_param("format", "json");
//! let envelope = ResponseEnvelope::new(Value::from([("name", Value::from("Alice"))]));
//! let response = wireform_rest::format_response(&registry, &request, &envelope, None)
//!     .expect("json is registered");
//! assert_eq!(response.content_type, "application/json; charset=utf-8");
//! ```
//!
//! The registry is built once at startup and shared immutably into request
//! handling; codecs are stateless and safe to share across requests.

pub mod error;
pub mod headers;
pub mod negotiate;
pub mod registry;
pub mod request;
pub mod response;

use wireform_codec::Value;

pub use error::{Error, Result};
pub use negotiate::{select_formatter, select_parser};
pub use registry::{CodecRegistry, DefaultFormat};
pub use request::{InboundRequest, RequestParts};
pub use response::{FormattedResponse, ResponseEnvelope};

/// Parses a request body with the negotiated parser.
///
/// The body's charset comes from the request's `Content-Type` parameter
/// when declared, else the codec's configured charset.
pub fn parse_request_body<R: InboundRequest>(
    registry: &CodecRegistry,
    request: &R,
    default: Option<&DefaultFormat>,
) -> Result<Value> {
    let codec = negotiate::select_parser(registry, request, default)?;
    let charset = request
        .header("content-type")
        .and_then(|content_type| headers::charset_of(content_type));
    Ok(codec.parse(request.body(), charset.as_deref())?)
}

/// Formats a response envelope with the negotiated formatter.
///
/// The envelope's status code is carried through separately from the body;
/// the computed `Content-Type` header value always includes the charset.
pub fn format_response<R: InboundRequest>(
    registry: &CodecRegistry,
    request: &R,
    envelope: &ResponseEnvelope,
    default: Option<&DefaultFormat>,
) -> Result<FormattedResponse> {
    let codec = negotiate::select_formatter(registry, request, default)?;
    let body = codec.format(envelope.body())?;
    Ok(FormattedResponse {
        status: envelope.status(),
        content_type: codec.content_type_header(),
        body,
    })
}
