use toy_http::http::request::{Method, Request, RequestBuilder};

#[test]
fn test_method_from_str_exact_match() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("get"), None);
    assert_eq!(Method::from_str("POST"), None);
    assert_eq!(Method::from_str(""), None);
}

#[test]
fn test_supported_methods_round_trip_through_as_str() {
    assert_eq!(Method::SUPPORTED, &[Method::GET]);

    for method in Method::SUPPORTED {
        assert_eq!(Method::from_str(method.as_str()), Some(*method));
    }
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new().method("GET").build().unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.uri, None);
    assert_eq!(req.version, "HTTP/1.1");
    assert!(req.headers.is_empty());
    assert!(req.body.is_empty());
}

#[test]
fn test_request_builder_missing_method() {
    let result = RequestBuilder::new().uri("/").build();

    assert_eq!(result.err(), Some("method missing"));
}

#[test]
fn test_request_builder_full() {
    let req = RequestBuilder::new()
        .method("POST")
        .uri("/api")
        .version("HTTP/1.0")
        .header("Host", "example.com")
        .body("payload")
        .build()
        .unwrap();

    assert_eq!(req.uri.as_deref(), Some("/api"));
    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(&req.body[..], b"payload");
}

#[test]
fn test_request_header_retrieval() {
    let req = Request::from_bytes(b"GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n").unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Accept"), Some("*/*"));
    assert_eq!(req.header("host"), None);
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_supported_method() {
    let get = RequestBuilder::new().method("GET").build().unwrap();
    let post = RequestBuilder::new().method("POST").build().unwrap();

    assert_eq!(get.supported_method(), Some(Method::GET));
    assert_eq!(post.supported_method(), None);
}

#[test]
fn test_request_clone_is_equal() {
    let req = Request::from_bytes(b"GET / HTTP/1.1\r\nHost: a\r\n\r\nbody").unwrap();

    assert_eq!(req.clone(), req);
}
