//! The inbound request collaborator.
//!
//! Negotiation only needs four observable fields of a request; the hosting
//! framework stays out of scope behind [`InboundRequest`]. [`RequestParts`]
//! is a plain implementation for tests and simple embeddings — a framework
//! adapter implements the trait over its own request type instead.

use std::collections::HashMap;

/// The observable request fields consumed by negotiation.
pub trait InboundRequest {
    /// The request path (used for the filename-style extension signal).
    fn path(&self) -> &str;

    /// The raw body bytes.
    fn body(&self) -> &[u8];

    /// A header value by case-insensitive name, if present.
    fn header(&self, name: &str) -> Option<&str>;

    /// A query parameter value by name, if present.
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// A plain, owned implementation of [`InboundRequest`].
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    path: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestParts {
    /// Creates request parts for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Adds a header; names are matched case-insensitively.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Adds a query parameter.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the body bytes.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

impl InboundRequest for RequestParts {
    fn path(&self) -> &str {
        &self.path
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
