//! Character-set decoding and encoding primitives.
//!
//! Codecs never touch raw bytes directly; they go through [`decode`] and
//! [`encode`] so that a body declared in an unsupported or wrong charset
//! fails in exactly one place. The supported repertoire is UTF-8 and
//! US-ASCII — the only encodings the wire formats here are served in.

use crate::error::CodecError;

/// The charset every codec defaults to.
pub const DEFAULT_CHARSET: &str = "utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Utf8,
    Ascii,
}

fn lookup(charset: &str) -> Option<Encoding> {
    // Charset names are case-insensitive (RFC 2978).
    let name = charset.trim().to_ascii_lowercase();
    match name.as_str() {
        "" | "utf-8" | "utf8" => Some(Encoding::Utf8),
        "us-ascii" | "ascii" => Some(Encoding::Ascii),
        _ => None,
    }
}

/// True if `charset` names an encoding this library can (de)code.
pub fn is_supported(charset: &str) -> bool {
    lookup(charset).is_some()
}

/// Decodes `raw` under the named charset.
///
/// Fails with [`CodecError::WrongCharset`] when the bytes are not valid in
/// that charset, or when the charset itself is unknown — either way the
/// declared encoding and the body disagree.
pub fn decode(raw: &[u8], charset: &str) -> Result<String, CodecError> {
    match lookup(charset) {
        Some(Encoding::Utf8) => String::from_utf8(raw.to_vec()).map_err(|_| CodecError::WrongCharset),
        Some(Encoding::Ascii) => {
            if raw.is_ascii() {
                String::from_utf8(raw.to_vec()).map_err(|_| CodecError::WrongCharset)
            } else {
                Err(CodecError::WrongCharset)
            }
        }
        None => Err(CodecError::WrongCharset),
    }
}

/// Encodes `text` into the named charset.
///
/// Failure here is [`CodecError::UnencodableOutput`]: the payload was
/// produced by this process, so an unrepresentable character means the
/// codec was configured with a charset its output cannot fit in.
pub fn encode(text: &str, charset: &str) -> Result<Vec<u8>, CodecError> {
    match lookup(charset) {
        Some(Encoding::Utf8) => Ok(text.as_bytes().to_vec()),
        Some(Encoding::Ascii) => {
            if text.is_ascii() {
                Ok(text.as_bytes().to_vec())
            } else {
                Err(CodecError::unencodable(format!(
                    "payload contains non-ASCII characters but charset is {}",
                    charset
                )))
            }
        }
        None => Err(CodecError::unencodable(format!(
            "unsupported charset: {}",
            charset
        ))),
    }
}
