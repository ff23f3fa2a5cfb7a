//! The outbound collaborators: response envelope in, formatted bytes out.

use http::{HeaderMap, HeaderValue, StatusCode, header};
use tracing::warn;
use wireform_codec::Value;

/// A status code paired with an optional payload, handed to formatting.
///
/// The status is `None` when the handler left it unset and the framework's
/// default applies; formatting carries it through untouched either way.
#[derive(Debug, Clone, Default)]
pub struct ResponseEnvelope {
    status: Option<StatusCode>,
    body: Option<Value>,
}

impl ResponseEnvelope {
    /// Creates an envelope around a payload, with the status unset.
    pub fn new(body: impl Into<Value>) -> Self {
        Self {
            status: None,
            body: Some(body.into()),
        }
    }

    /// Creates an envelope with no payload and the status unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// The status code, if one was set.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The payload, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl From<Value> for ResponseEnvelope {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

/// The product of formatting: status, computed `Content-Type` header value,
/// and body bytes, ready to be copied into the framework's response type.
#[derive(Debug, Clone)]
pub struct FormattedResponse {
    /// The envelope's status code, if one was set.
    pub status: Option<StatusCode>,
    /// The full `Content-Type` value, `"{content_type}; charset={charset}"`.
    pub content_type: String,
    /// The encoded body.
    pub body: Vec<u8>,
}

impl FormattedResponse {
    /// Writes the computed `Content-Type` into a destination header map.
    pub fn apply_headers(&self, headers: &mut HeaderMap) {
        match HeaderValue::from_str(&self.content_type) {
            Ok(value) => {
                headers.insert(header::CONTENT_TYPE, value);
            }
            Err(_) => {
                warn!(
                    content_type = %self.content_type,
                    "computed content type is not a valid header value"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_defaults() {
        let envelope = ResponseEnvelope::empty();
        assert_eq!(envelope.status(), None);
        assert!(envelope.body().is_none());
    }

    #[test]
    fn test_envelope_with_status() {
        let envelope = ResponseEnvelope::new(Value::from("ok")).with_status(StatusCode::CREATED);
        assert_eq!(envelope.status(), Some(StatusCode::CREATED));
        assert_eq!(envelope.body(), Some(&Value::from("ok")));
    }

    #[test]
    fn test_apply_headers_sets_content_type() {
        let formatted = FormattedResponse {
            status: None,
            content_type: "application/json; charset=utf-8".to_string(),
            body: Vec::new(),
        };
        let mut headers = HeaderMap::new();
        formatted.apply_headers(&mut headers);
        assert_eq!(
            headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json; charset=utf-8")
        );
    }
}
