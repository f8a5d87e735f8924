//! Integration tests for the orders client against a throwaway local
//! HTTP listener.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use multipedidos_client::{fetch_order_json, ClientConfig, IntegrationError, OrderClient};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serves a single canned response and returns the request head it received.
fn serve_once(status_line: &'static str, body: impl Into<String>) -> (String, JoinHandle<String>) {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = String::new();
        loop {
            let mut line = String::new();
            let read = reader.read_line(&mut line).unwrap();
            if read == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        head
    });

    (base_url, handle)
}

#[test]
fn test_ok_returns_body() {
    init_tracing();
    let body = r#"{"id":42,"codigo":"PED-000042","total":"1035.00"}"#;
    let (base_url, server) = serve_once("200 OK", body);

    let json = fetch_order_json(&base_url, 42).unwrap().unwrap();

    let order: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(order["codigo"], "PED-000042");

    let head = server.join().unwrap();
    assert!(head.starts_with("GET /api/pedidos/42 HTTP/1.1"));
    assert!(head.to_lowercase().contains("accept: application/json"));
}

#[test]
fn test_any_2xx_returns_body() {
    init_tracing();
    let (base_url, server) = serve_once("203 Non-Authoritative Information", "{}");

    let json = fetch_order_json(&base_url, 1).unwrap();
    assert_eq!(json.as_deref(), Some("{}"));
    server.join().unwrap();
}

#[test]
fn test_large_body_is_returned_whole() {
    init_tracing();
    let padding = "x".repeat(11 * 1024 * 1024);
    let body = format!(r#"{{"id":8,"notas":"{}"}}"#, padding);
    let expected_len = body.len();
    let (base_url, server) = serve_once("200 OK", body);

    let json = fetch_order_json(&base_url, 8).unwrap().unwrap();
    assert_eq!(json.len(), expected_len);
    assert!(json.ends_with(r#"x"}"#));
    server.join().unwrap();
}

#[test]
fn test_trailing_slash_in_base_url() {
    init_tracing();
    let (base_url, server) = serve_once("200 OK", "{}");

    fetch_order_json(&format!("{}/", base_url), 7).unwrap();

    let head = server.join().unwrap();
    assert!(head.starts_with("GET /api/pedidos/7 HTTP/1.1"));
}

#[test]
fn test_not_found_returns_none() {
    init_tracing();
    let (base_url, server) = serve_once("404 Not Found", r#"{"error":"no existe"}"#);

    let result = fetch_order_json(&base_url, 99).unwrap();
    assert!(result.is_none());
    server.join().unwrap();
}

#[test]
fn test_server_error_is_unexpected_status() {
    init_tracing();
    let (base_url, server) = serve_once("500 Internal Server Error", "{}");

    let err = fetch_order_json(&base_url, 5).unwrap_err();
    match &err {
        IntegrationError::UnexpectedStatus { status, endpoint } => {
            assert_eq!(*status, 500);
            assert!(endpoint.ends_with("/api/pedidos/5"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(err.is_retryable());
    server.join().unwrap();
}

#[test]
fn test_client_error_is_unexpected_status() {
    init_tracing();
    let (base_url, server) = serve_once("400 Bad Request", "{}");

    let err = fetch_order_json(&base_url, 5).unwrap_err();
    assert!(matches!(err, IntegrationError::UnexpectedStatus { status: 400, .. }));
    assert!(!err.is_retryable());
    server.join().unwrap();
}

#[test]
fn test_connection_refused_is_transport_error() {
    init_tracing();
    let base_url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let err = fetch_order_json(&base_url, 1).unwrap_err();
    assert!(matches!(err, IntegrationError::Transport(_)));
}

#[test]
fn test_timeout_is_transport_error() {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    // Accept and never answer.
    thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
    });

    let client = OrderClient::new(ClientConfig::default().with_timeout_secs(1));
    let err = client.fetch_order_json(&base_url, 1).unwrap_err();
    assert!(matches!(err, IntegrationError::Transport(_)));
}

#[test]
fn test_configured_base_url() {
    init_tracing();
    let (base_url, server) = serve_once("200 OK", r#"{"id":3}"#);

    let client = OrderClient::new(ClientConfig::default().with_base_url(base_url));
    let json = client.fetch_configured_order_json(3).unwrap();
    assert_eq!(json.as_deref(), Some(r#"{"id":3}"#));

    let head = server.join().unwrap();
    assert!(head.starts_with("GET /api/pedidos/3 HTTP/1.1"));
}
