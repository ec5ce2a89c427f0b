use rapide::http::request::{Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "localhost".to_string());
    headers.insert("Accept".to_string(), "text/html".to_string());

    let req = Request {
        method: "GET".to_string(),
        target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    };

    assert_eq!(req.header("Host"), Some("localhost"));
    assert_eq!(req.header("Accept"), Some("text/html"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), "42".to_string());

    let req = Request {
        method: "POST".to_string(),
        target: "/upload".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    };

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing_or_invalid() {
    let req = RequestBuilder::new().target("/").build().unwrap();
    assert_eq!(req.content_length(), 0);

    let req = RequestBuilder::new()
        .target("/")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_keep_alive_default() {
    // HTTP/1.1 defaults to keep-alive
    let req = RequestBuilder::new().target("/").build().unwrap();
    assert!(req.keep_alive());
}

#[test]
fn test_request_keep_alive_explicit() {
    let req = RequestBuilder::new()
        .target("/")
        .header("Connection", "keep-alive")
        .build()
        .unwrap();
    assert!(req.keep_alive());

    let req = RequestBuilder::new()
        .target("/")
        .header("Connection", "close")
        .build()
        .unwrap();
    assert!(!req.keep_alive());
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new()
        .method("HEAD")
        .target("/page.html")
        .build()
        .unwrap();

    assert_eq!(req.method, "HEAD");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_request_builder_requires_target() {
    assert!(RequestBuilder::new().build().is_err());
}
