//! Error types for the negotiation layer.
//!
//! The taxonomy is small and symbolic: the request-handling layer owns
//! wire-level rendering and only needs to know which kind occurred.
//! [`Error::status`] exposes the conventional HTTP mapping:
//!
//! | Variant | HTTP Status |
//! |---------|-------------|
//! | BadRequest | 400 |
//! | NotAcceptable | 406 |
//! | Configuration | 500 |

use http::StatusCode;
use thiserror::Error;
use wireform_codec::CodecError;

/// The primary error type for negotiation and payload mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// The request body was malformed or undecodable.
    #[error("bad request: {message}")]
    BadRequest {
        /// What was wrong with the input.
        message: String,
    },

    /// A named format was explicitly requested but is not registered.
    #[error("not acceptable: {message}")]
    NotAcceptable {
        /// Which name failed to resolve.
        message: String,
    },

    /// The registry or a codec is misconfigured.
    #[error("configuration error: {message}")]
    Configuration {
        /// What the configuration check rejected.
        message: String,
    },
}

impl Error {
    /// The conventional HTTP status code for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            Error::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::WrongCharset | CodecError::Unparsable { .. } => Error::BadRequest {
                message: err.to_string(),
            },
            CodecError::UnencodableOutput { .. } => Error::Configuration {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for negotiation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = Error::BadRequest {
            message: "x".to_string(),
        };
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let not_acceptable = Error::NotAcceptable {
            message: "x".to_string(),
        };
        assert_eq!(not_acceptable.status(), StatusCode::NOT_ACCEPTABLE);

        let config = Error::Configuration {
            message: "x".to_string(),
        };
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_codec_errors_map_to_bad_request() {
        let err: Error = CodecError::WrongCharset.into();
        assert!(matches!(err, Error::BadRequest { .. }));
        assert!(err.to_string().contains("wrong charset"));
    }

    #[test]
    fn test_unencodable_output_maps_to_configuration() {
        let err: Error = CodecError::UnencodableOutput {
            detail: "ascii".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
