use bytes::Bytes;
use tracing::debug;

use crate::http::headers::Headers;
use crate::http::request::{Request, DEFAULT_HTTP_VERSION};

const SEPARATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer held no bytes at all
    Empty,
    /// The request line or a header line is not valid UTF-8
    InvalidUtf8,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request"),
            ParseError::InvalidUtf8 => write!(f, "request head is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a raw request buffer in a single pass.
///
/// The buffer is whatever one read returned, so it may be truncated. Missing
/// pieces degrade into absent or empty fields instead of errors:
///
/// - no second request-line token leaves `uri` as `None`
/// - no third token falls back to `HTTP/1.1`
/// - header lines without `": "` are skipped
/// - no blank line means an empty body
///
/// The body is the chunk between the first blank line and the next one (or
/// the end of the buffer). It is never decoded.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head_bytes, body_bytes) = match find_separator(buf) {
        Some(end) => (&buf[..end], first_chunk(&buf[end + SEPARATOR.len()..])),
        None => (buf, &[][..]),
    };

    let head = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidUtf8)?;
    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');

    let method = parts.next().unwrap_or_default().to_string();
    let uri = parts.next().map(str::to_string);
    let version = parts
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_HTTP_VERSION.to_string());

    // Headers
    let mut headers = Headers::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        match line.split_once(": ") {
            Some((name, value)) => headers.insert(name, value),
            None => {
                debug!(line, "Skipping malformed header line");
            }
        }
    }

    Ok(Request {
        method,
        uri,
        version,
        headers,
        body: Bytes::copy_from_slice(body_bytes),
    })
}

fn find_separator(buf: &[u8]) -> Option<usize> {
    buf.windows(SEPARATOR.len())
        .position(|w| w == SEPARATOR)
}

fn first_chunk(rest: &[u8]) -> &[u8] {
    match find_separator(rest) {
        Some(end) => &rest[..end],
        None => rest,
    }
}
