//! `WebSocket` stream tests.
//!
//! Starts the real server on an ephemeral port, performs the upgrade
//! handshake over a raw TCP stream, and reads the frames the server
//! pushes after a mutation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use itemcast_api::{AppState, Notifier, build_router, cors_layer};
use itemcast_db::MemoryItemStore;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Send the upgrade request and consume the response head.
async fn handshake(stream: &mut TcpStream, host: &str) -> String {
    let request = format!(
        "GET /ws HTTP/1.1\r\n\
         Host: {host}\r\n\
         Upgrade: websocket\r\n\
         Connection: Upgrade\r\n\
         Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
         Sec-WebSocket-Version: 13\r\n\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    // Byte at a time so no frame data is consumed with the head.
    let mut head = Vec::new();
    while !head.ends_with(b"\r\n\r\n") {
        let byte = tokio::time::timeout(READ_TIMEOUT, stream.read_u8())
            .await
            .expect("handshake timed out")
            .unwrap();
        head.push(byte);
    }
    String::from_utf8(head).unwrap()
}

/// Read one unmasked, unfragmented text frame with a short payload.
async fn read_text_frame(stream: &mut TcpStream) -> Value {
    let mut header_bytes = [0_u8; 2];
    tokio::time::timeout(READ_TIMEOUT, stream.read_exact(&mut header_bytes))
        .await
        .expect("no frame received")
        .unwrap();

    assert_eq!(header_bytes[0], 0x81, "expected a final text frame");
    let len = usize::from(header_bytes[1] & 0x7f);
    assert!(len < 126, "payload too long for this reader");

    let mut payload = vec![0_u8; len];
    stream.read_exact(&mut payload).await.unwrap();
    serde_json::from_slice(&payload).unwrap()
}

#[tokio::test]
async fn test_ws_streams_mutation_events() {
    let state = Arc::new(AppState::new(MemoryItemStore::new(), Notifier::new(16)));
    let router = build_router(Arc::clone(&state), cors_layer(&[]));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_router = router.clone();
    tokio::spawn(async move {
        axum::serve(listener, server_router).await.unwrap();
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let head = handshake(&mut stream, &addr.to_string()).await;
    assert!(head.starts_with("HTTP/1.1 101"), "{head}");
    assert_eq!(state.notifier.subscriber_count(), 1);

    let create = Request::builder()
        .method("POST")
        .uri("/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "name": " Widget " }).to_string()))
        .unwrap();
    let response = router.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/items/1")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        read_text_frame(&mut stream).await,
        json!({ "event": "item_created", "payload": { "id": 1, "name": "Widget" } })
    );
    assert_eq!(
        read_text_frame(&mut stream).await,
        json!({ "event": "item_deleted", "payload": { "id": 1 } })
    );
}
