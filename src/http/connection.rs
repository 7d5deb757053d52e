use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::http::dispatch::dispatch;
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Handles exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_limit: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// `read_limit` bounds the single read; anything the peer sends beyond it is ignored.
    pub fn new(stream: S, read_limit: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_limit),
            read_limit,
            state: ConnectionState::Reading,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = dispatch(req);
                    info!(
                        method = %req.method,
                        uri = req.uri.as_deref().unwrap_or(""),
                        status = response.status.as_u16(),
                        "Handled request"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single bounded read and parses whatever arrived.
    ///
    /// Returns `Ok(None)` when the peer sent nothing before closing.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.clear();
        self.buffer.resize(self.read_limit, 0);

        let n = self.stream.read(&mut self.buffer[..]).await?;
        self.buffer.truncate(n);

        match parse_http_request(&self.buffer) {
            Ok(request) => {
                debug!(headers = ?request.headers, body = ?request.body, "Parsed request");
                Ok(Some(request))
            }

            Err(ParseError::Empty) => {
                debug!("Peer closed without sending a request");
                Ok(None)
            }

            Err(e) => Err(anyhow::anyhow!("HTTP parse error: {:?}", e)),
        }
    }
}
