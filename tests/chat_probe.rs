//! Probe tests against a mock chat-messages endpoint.
//!
//! These spawn a tiny axum server bound to an ephemeral local port standing in
//! for the remote Dify service. The handler records the request it received
//! (Authorization header and JSON body) and answers with a canned status/body,
//! so the tests can check both directions of the exchange without any real
//! upstream.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Json;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use dify_probe::chat::ChatMessageRequest;
use dify_probe::client::{ChatOutcome, DifyClient};

/// What the mock endpoint saw on its single expected request.
struct CapturedRequest {
    authorization: Option<String>,
    body: Value,
}

struct MockDify {
    base_url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    join: JoinHandle<()>,
}

impl Drop for MockDify {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Spawn a mock Dify answering `POST /chat-messages` with the given
/// status and body.
async fn spawn_mock_dify(status: StatusCode, reply: &'static str) -> MockDify {
    let captured: Arc<Mutex<Option<CapturedRequest>>> = Arc::new(Mutex::new(None));
    let seen = captured.clone();

    let app = Router::new().route(
        "/chat-messages",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = Some(CapturedRequest {
                    authorization: headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from),
                    body,
                });
                (status, [(header::CONTENT_TYPE, "application/json")], reply)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let join = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app.into_make_service()).await {
            eprintln!("mock dify server error: {e:?}");
        }
    });

    MockDify {
        base_url: format!("http://{addr}"),
        captured,
        join,
    }
}

/// A plain client with a short timeout; proxy env vars must not interfere
/// with loopback tests.
fn make_client(base_url: &str) -> DifyClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("failed building reqwest client");
    DifyClient::with_http(http, base_url)
}

#[tokio::test]
async fn answered_probe_renders_the_answer() {
    let mock = spawn_mock_dify(StatusCode::OK, r#"{"answer":"x"}"#).await;
    let client = make_client(&mock.base_url);

    let outcome = client
        .send_chat_message("app-test-key", &ChatMessageRequest::smoke())
        .await
        .expect("probe transport");

    assert!(matches!(outcome, ChatOutcome::Answered(_)));
    let rendered = outcome.render();
    assert!(
        rendered.contains('x'),
        "rendered report should contain the answer: {rendered}"
    );
}

#[tokio::test]
async fn probe_sends_the_fixed_payload_with_bearer_auth() {
    let mock = spawn_mock_dify(StatusCode::OK, r#"{"answer":"ok"}"#).await;
    let client = make_client(&mock.base_url);

    client
        .send_chat_message("app-test-key", &ChatMessageRequest::smoke())
        .await
        .expect("probe transport");

    let captured = mock
        .captured
        .lock()
        .unwrap()
        .take()
        .expect("mock saw a request");
    assert_eq!(
        captured.authorization.as_deref(),
        Some("Bearer app-test-key")
    );
    assert_eq!(
        captured.body,
        json!({
            "inputs": {},
            "query": "你好，请帮我写一个教学设计",
            "response_mode": "blocking",
            "conversation_id": "",
            "user": "test_user"
        })
    );
}

#[tokio::test]
async fn failed_probe_reports_status_and_raw_body() {
    let mock = spawn_mock_dify(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let client = make_client(&mock.base_url);

    let outcome = client
        .send_chat_message("app-test-key", &ChatMessageRequest::smoke())
        .await
        .expect("probe transport");

    match &outcome {
        ChatOutcome::Failed { status, body } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Failed outcome, got {other:?}"),
    }

    let rendered = outcome.render();
    assert!(rendered.contains("500"), "missing status: {rendered}");
    assert!(rendered.contains("boom"), "missing body: {rendered}");
}

#[tokio::test]
async fn answer_fallback_is_rendered_when_the_field_is_absent() {
    let mock = spawn_mock_dify(StatusCode::OK, r#"{"event":"message"}"#).await;
    let client = make_client(&mock.base_url);

    let outcome = client
        .send_chat_message("app-test-key", &ChatMessageRequest::smoke())
        .await
        .expect("probe transport");

    assert!(outcome
        .render()
        .contains(dify_probe::chat::NO_ANSWER_FALLBACK));
}
