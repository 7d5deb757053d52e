//! toy-http - a minimal HTTP/1.1 server
//!
//! Parses one request per connection, answers GET with a fixed page and
//! everything else with 501 Not Implemented.

pub mod config;
pub mod http;
pub mod server;
