//! HTTP protocol implementation.
//!
//! A minimal HTTP/1.1 layer: one request per connection, one response, then
//! the connection is closed.
//!
//! # Architecture
//!
//! - **`parser`**: turns a raw byte buffer into a [`request::Request`]
//! - **`request`**: request representation and the supported [`request::Method`] set
//! - **`headers`**: ordered header map shared by requests and responses
//! - **`dispatch`**: routes a request to its handler, 501 for unsupported methods
//! - **`response`**: status code table and response builder
//! - **`writer`**: serializes and writes responses to the client
//! - **`connection`**: the per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read
//!        └──────┬──────┘
//!               │ Request parsed (nothing read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch on method
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```
//! let response = toy_http::http::dispatch::respond(b"GET / HTTP/1.1\r\nHost: test\r\n\r\n").unwrap();
//! assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

pub mod connection;
pub mod dispatch;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
