//! End-to-end tests for `PortraitClient::generate` against a local
//! single-shot HTTP responder.

use liveloop_api_client::{ClientConfig, GenerationError, GenerationPhase, PortraitClient};
use liveloop_image::{ImageKind, NormalizedImage};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn test_portrait() -> NormalizedImage {
    NormalizedImage {
        data_uri: "data:image/png;base64,cG9ydHJhaXQ=".to_string(),
        width: 300,
        height: 300,
        kind: ImageKind::Png,
    }
}

fn client_for(addr: SocketAddr, key: Option<&str>) -> PortraitClient {
    let mut config = ClientConfig::default()
        .with_api_url(format!("http://{addr}"))
        .with_timeout(Duration::from_secs(5));
    if let Some(key) = key {
        config = config.with_api_key(key);
    }
    PortraitClient::with_config(config).unwrap()
}

/// Serve exactly one HTTP exchange, returning the raw request bytes.
async fn serve_once(status_line: &str, content_type: &str, body: Vec<u8>) -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response_head = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) || n == 0 {
                break;
            }
        }

        stream.write_all(response_head.as_bytes()).await.unwrap();
        stream.write_all(&body).await.unwrap();
        stream.shutdown().await.unwrap();
        request
    });

    (addr, handle)
}

/// True once we have the full header block plus Content-Length bytes.
fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text
        .lines()
        .find_map(|l| {
            let lower = l.to_ascii_lowercase();
            lower.strip_prefix("content-length:")?.trim().parse::<usize>().ok()
        })
        .unwrap_or(0);
    request.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn success_returns_exact_bytes_and_ordered_phases() {
    let video = vec![0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let (addr, server) = serve_once("200 OK", "video/mp4", video.clone()).await;

    let client = client_for(addr, Some("sk-test"));
    let mut phases = Vec::new();
    let bytes = client
        .generate(&test_portrait(), |p| phases.push(p))
        .await
        .unwrap();

    assert_eq!(bytes, video);
    assert_eq!(
        phases,
        vec![
            GenerationPhase::Preparing,
            GenerationPhase::Generating,
            GenerationPhase::Complete,
        ]
    );

    let request = String::from_utf8_lossy(&server.await.unwrap()).to_string();
    assert!(request.contains("x-api-key: sk-test"));
    assert!(request.contains("\"face_image\":\"cG9ydHJhaXQ=\""));
    assert!(request.contains("liveportrait-video.mp4"));
    // The data-URI prefix must never reach the wire.
    assert!(!request.contains("data:image/png"));
}

#[tokio::test]
async fn missing_credential_fails_without_network() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let accepts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepts);
    tokio::spawn(async move {
        while listener.accept().await.is_ok() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let client = client_for(addr, None);
    let err = client
        .generate(&test_portrait(), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredential));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(accepts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn server_error_field_is_preferred() {
    let body = br#"{"error":"invalid api key"}"#.to_vec();
    let (addr, _server) = serve_once("401 Unauthorized", "application/json", body).await;

    let client = client_for(addr, Some("sk-bad"));
    let err = client
        .generate(&test_portrait(), |_| {})
        .await
        .unwrap_err();

    match err {
        GenerationError::ApiResponse { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn json_success_body_is_malformed() {
    let body = br#"{"queued":true}"#.to_vec();
    let (addr, _server) = serve_once("200 OK", "application/json", body).await;

    let client = client_for(addr, Some("sk-test"));
    let mut phases = Vec::new();
    let err = client
        .generate(&test_portrait(), |p| phases.push(p))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::MalformedResponse(_)));
    // Complete is never reported on a failed call.
    assert_eq!(
        phases,
        vec![GenerationPhase::Preparing, GenerationPhase::Generating]
    );
}

#[tokio::test]
async fn empty_success_body_is_malformed() {
    let (addr, _server) = serve_once("200 OK", "video/mp4", Vec::new()).await;

    let client = client_for(addr, Some("sk-test"));
    let err = client
        .generate(&test_portrait(), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn stalled_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection open without responding.
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let config = ClientConfig::default()
        .with_api_url(format!("http://{addr}"))
        .with_api_key("sk-test")
        .with_timeout(Duration::from_millis(300));
    let client = PortraitClient::with_config(config).unwrap();

    let err = client
        .generate(&test_portrait(), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Timeout(_)));
}
