//! Method dispatch.
//!
//! Routing is a closed mapping from [`Method`] to a handler function plus the
//! 501 fallback for every token outside [`Method::SUPPORTED`].

use bytes::Bytes;
use tracing::debug;

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// Turns a parsed request into a finished response.
pub type Handler = fn(&Request) -> Response;

/// Body returned for every GET request.
pub const GREETING_BODY: &[u8] =
    b"\n            <html><body><h1>Request received!</h1><body></html>\n        ";

/// Returns the handler registered for a supported method.
pub fn handler_for(method: Method) -> Handler {
    match method {
        Method::GET => handle_get,
    }
}

/// Routes a request by its method token. Unknown tokens get 501.
pub fn dispatch(req: &Request) -> Response {
    match req.supported_method() {
        Some(method) => handler_for(method)(req),
        None => handle_not_implemented(req),
    }
}

pub fn handle_get(_req: &Request) -> Response {
    Response::ok(GREETING_BODY)
}

pub fn handle_not_implemented(_req: &Request) -> Response {
    Response::not_implemented()
}

/// Parses a raw buffer, dispatches it and returns the serialized response.
pub fn respond(buf: &[u8]) -> Result<Bytes, ParseError> {
    let req = parse_http_request(buf)?;
    debug!(headers = ?req.headers, body = ?req.body, "Parsed request");

    Ok(dispatch(&req).to_bytes())
}
