//! Codec selection for inbound parsing and outbound formatting.
//!
//! Parsing and formatting have different natural signal sources, so the two
//! entry points use distinct precedence chains:
//!
//! - [`select_parser`]: the declared `Content-Type` header first, then the
//!   short-name signal (a `format` query parameter, else a filename-style
//!   extension on the path).
//! - [`select_formatter`]: the short-name signal first, then the first
//!   acceptable entry of the `Accept` header that names a registered codec.
//!
//! Both fall back to the default codec when no signal is present at all,
//! and both propagate `NotAcceptable` unchanged when an explicit name fails
//! to resolve.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;
use wireform_codec::Codec;

use crate::error::Result;
use crate::headers;
use crate::registry::{CodecRegistry, DefaultFormat};
use crate::request::InboundRequest;

/// Trailing filename-style extension, e.g. `/users/1.json`.
static FORMAT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?P<format>\w{1,8})$").expect("extension pattern is valid"));

/// Selects the codec for parsing the request body.
pub fn select_parser<R: InboundRequest>(
    registry: &CodecRegistry,
    request: &R,
    default: Option<&DefaultFormat>,
) -> Result<Arc<dyn Codec>> {
    match request.header("content-type") {
        Some(content_type) if !content_type.trim().is_empty() => {
            debug!(content_type, "selecting parser from content-type header");
            registry.resolve_by_content_type(content_type, default)
        }
        _ => {
            let name = short_name(request);
            debug!(name = name.as_deref(), "selecting parser from short-name signal");
            registry.resolve(name.as_deref(), default)
        }
    }
}

/// Selects the codec for formatting the response body.
pub fn select_formatter<R: InboundRequest>(
    registry: &CodecRegistry,
    request: &R,
    default: Option<&DefaultFormat>,
) -> Result<Arc<dyn Codec>> {
    if let Some(name) = short_name(request) {
        debug!(name = %name, "selecting formatter from short-name signal");
        return registry.resolve(Some(&name), default);
    }

    if let Some(accept) = request.header("accept") {
        for (media_type, _weight) in headers::parse_accept(accept) {
            if registry.contains(&media_type) {
                debug!(media_type = %media_type, "selecting formatter from accept header");
                return registry.resolve(Some(&media_type), default);
            }
        }
    }

    registry.resolve(None, default)
}

/// The short-name format signal: `?format=...` first, then a trailing
/// path extension.
fn short_name<R: InboundRequest>(request: &R) -> Option<String> {
    if let Some(format) = request.query_param("format") {
        if !format.is_empty() {
            return Some(format.to_string());
        }
    }
    FORMAT_EXTENSION
        .captures(request.path())
        .and_then(|captures| captures.name("format"))
        .map(|found| found.as_str().to_string())
}
