use bytes::Bytes;

use crate::http::headers::Headers;
use crate::http::writer::serialize_response;

/// Value of the `Server` header added to every response.
pub const SERVER_NAME: &str = "MyServer";

/// Value of the `Content-Type` header added to every response.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

const NOT_FOUND_BODY: &[u8] =
    b"\n            <html><body><h1>404: Not Found</h1><body></html>\n        ";

const NOT_IMPLEMENTED_BODY: &[u8] =
    b"\n            <html><body><h1>501: Not Implemented</h1><body></html>\n        ";

/// HTTP status codes the server knows a reason phrase for.
///
/// - `Ok` (200): Request successful
/// - `NotFound` (404): Resource not found
/// - `NotImplemented` (501): Method has no handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

/// A numeric code with no entry in the [`StatusCode`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatusCode(pub u16);

impl std::fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no reason phrase for status code {}", self.0)
    }
}

impl std::error::Error for UnknownStatusCode {}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use toy_http::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase used in the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use toy_http::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            404 => Ok(StatusCode::NotFound),
            501 => Ok(StatusCode::NotImplemented),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in serialization order
    pub headers: Headers,
    /// Response body, written verbatim after the blank line
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Starts with `Server: MyServer` and `Content-Type: text/html`. Headers set
/// through the builder replace a default of the same name in place.
///
/// # Example
///
/// ```
/// # use toy_http::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body("hi")
///     .build();
///
/// assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
/// assert_eq!(response.headers.len(), 2);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Headers,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the default headers.
    pub fn new(status: StatusCode) -> Self {
        let mut headers = Headers::new();
        headers.insert("Server", SERVER_NAME);
        headers.insert("Content-Type", DEFAULT_CONTENT_TYPE);

        Self {
            status,
            headers,
            body: Bytes::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Merges extra headers. Caller-supplied values win over the defaults.
    pub fn headers<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.merge(extra);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response. No `Content-Length` is added; the peer
    /// reads the body until the connection closes.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body)
            .build()
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body(NOT_FOUND_BODY)
            .build()
    }

    /// Creates a 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        ResponseBuilder::new(StatusCode::NotImplemented)
            .body(NOT_IMPLEMENTED_BODY)
            .build()
    }

    /// Serializes the response into its wire bytes.
    pub fn to_bytes(&self) -> Bytes {
        serialize_response(self)
    }
}
