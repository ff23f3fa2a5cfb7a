//! Error types for codec operations.
//!
//! Every failure a codec can report falls into one of two families: the
//! input could not be understood (`WrongCharset`, `Unparsable` — the
//! request-handling layer maps these to a client error), or the payload we
//! were asked to emit cannot be represented in the configured output
//! encoding (`UnencodableOutput` — a configuration problem, not the
//! client's fault).

use thiserror::Error;

/// The primary error type for parse and format operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The raw input bytes could not be decoded under the declared charset.
    #[error("wrong charset")]
    WrongCharset,

    /// The input violated the wire format's grammar.
    #[error("unable to parse data: {detail}")]
    Unparsable {
        /// What the underlying parser rejected.
        detail: String,
    },

    /// The payload cannot be represented in the codec's output encoding.
    #[error("unencodable output: {detail}")]
    UnencodableOutput {
        /// Why the payload could not be written.
        detail: String,
    },
}

impl CodecError {
    /// Shorthand for an [`CodecError::Unparsable`] with the given detail.
    pub(crate) fn unparsable(detail: impl ToString) -> Self {
        CodecError::Unparsable {
            detail: detail.to_string(),
        }
    }

    /// Shorthand for an [`CodecError::UnencodableOutput`] with the given detail.
    pub(crate) fn unencodable(detail: impl ToString) -> Self {
        CodecError::UnencodableOutput {
            detail: detail.to_string(),
        }
    }
}

impl From<quick_xml::Error> for CodecError {
    fn from(err: quick_xml::Error) -> Self {
        CodecError::unparsable(err)
    }
}

// quick-xml's writer reports plain io errors; writing into a Vec cannot
// fail, so surfacing one means the output side misbehaved.
impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::unencodable(err)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::unparsable(err)
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
