use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};
use toy_http::http::connection::{Connection, ConnectionState};
use toy_http::http::dispatch::GREETING_BODY;

async fn exchange(request: &[u8], read_limit: usize) -> (Vec<u8>, anyhow::Result<()>, bool) {
    let (mut client, server) = duplex(16 * 1024);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server, read_limit);
        let result = conn.run().await;
        let closed = matches!(conn.state(), ConnectionState::Closed);
        (result, closed)
    });

    if request.is_empty() {
        client.shutdown().await.unwrap();
    } else {
        client.write_all(request).await.unwrap();
    }

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();

    let (result, closed) = handle.await.unwrap();
    (out, result, closed)
}

#[tokio::test]
async fn test_connection_answers_get() {
    let (out, result, closed) = exchange(b"GET / HTTP/1.1\r\nHost: test\r\n\r\n", 1024).await;

    assert!(result.is_ok());
    assert!(closed);
    assert!(out.starts_with(b"HTTP/1.1 200 OK\r\n"));
    assert!(out.ends_with(GREETING_BODY));
}

#[tokio::test]
async fn test_connection_answers_unsupported_with_501() {
    let (out, result, _) = exchange(b"DELETE /item HTTP/1.1\r\n\r\n", 1024).await;

    assert!(result.is_ok());
    assert!(out.starts_with(b"HTTP/1.1 501 Not Implemented\r\n"));
}

#[tokio::test]
async fn test_connection_truncates_large_request() {
    let mut request = b"GET / HTTP/1.1\r\nX-Padding: ".to_vec();
    request.extend(std::iter::repeat_n(b'a', 3000));
    request.extend_from_slice(b"\r\n\r\n");

    let (out, result, _) = exchange(&request, 1024).await;

    assert!(result.is_ok());
    assert!(out.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn test_connection_closes_silently_on_empty_read() {
    let (out, result, closed) = exchange(b"", 1024).await;

    assert!(result.is_ok());
    assert!(closed);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_connection_aborts_on_decode_error() {
    let (out, result, closed) = exchange(b"GET / HTTP/1.1\r\nX: \xff\xfe\r\n\r\n", 1024).await;

    assert!(result.is_err());
    assert!(!closed);
    assert!(out.is_empty());
}
