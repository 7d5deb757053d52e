use bytes::Bytes;

use crate::http::headers::Headers;
use crate::http::parser::{parse_http_request, ParseError};

/// Version assumed when the request line carries no third token.
pub const DEFAULT_HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP methods the server has a handler for.
///
/// This is a closed set: every variant is mapped to a handler by
/// [`crate::http::dispatch::handler_for`]. Any other method token is answered
/// with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

/// Represents a parsed HTTP request from a client.
///
/// The method is kept as the raw token from the request line so that
/// unsupported verbs still reach the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token of the request line, e.g. "GET"
    pub method: String,
    /// Second token of the request line, if any
    pub uri: Option<String>,
    /// Third token of the request line, "HTTP/1.1" when absent
    pub version: String,
    /// Request headers in the order they were received
    pub headers: Headers,
    /// Bytes following the blank line
    pub body: Bytes,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<String>,
    uri: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Bytes,
}

impl Method {
    /// Every method with a registered handler.
    pub const SUPPORTED: &'static [Method] = &[Method::GET];

    /// Parses a method token. Matching is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use toy_http::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::SUPPORTED.iter().copied().find(|m| m.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            uri: None,
            version: None,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            uri: self.uri,
            version: self
                .version
                .unwrap_or_else(|| DEFAULT_HTTP_VERSION.to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Parses a raw request buffer. See [`parse_http_request`].
    pub fn from_bytes(buf: &[u8]) -> Result<Self, ParseError> {
        parse_http_request(buf)
    }

    /// Retrieves a header value by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// The method as a [`Method`], or `None` when no handler supports it.
    pub fn supported_method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }
}
