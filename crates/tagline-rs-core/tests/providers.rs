//! HTTP provider tests against a local mock upstream.

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tagline_rs_core::{
    CompletionProvider, HuggingFaceProvider, OpenAiProvider, ProviderError, build_http_client,
};

type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Route that records auth header and body, then replies with `reply`.
fn capturing_route(path: &str, captured: Captured, reply: Value) -> Router {
    Router::new().route(
        path,
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                *captured.lock().expect("lock") = Some((auth, body));
                Json(reply)
            }
        }),
    )
}

fn client() -> reqwest::Client {
    build_http_client(Some(5)).expect("client")
}

#[tokio::test]
async fn openai_sends_chat_request_and_reads_content() {
    let captured: Captured = Arc::default();
    let base_url = spawn_upstream(capturing_route(
        "/v1/chat/completions",
        captured.clone(),
        json!({ "choices": [{ "message": { "role": "assistant", "content": "A\nB" } }] }),
    ))
    .await;
    let provider = OpenAiProvider::new(
        client(),
        format!("{base_url}/v1/"),
        "gpt-test",
        Some("test-key".to_string()),
    );

    let text = provider.complete("hello prompt").await.expect("complete");

    assert_eq!(text, "A\nB");
    let (auth, body) = captured.lock().expect("lock").clone().expect("request seen");
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(body["model"], json!("gpt-test"));
    assert_eq!(
        body["messages"],
        json!([{ "role": "user", "content": "hello prompt" }])
    );
}

#[tokio::test]
async fn openai_without_key_sends_no_auth_header() {
    let captured: Captured = Arc::default();
    let base_url = spawn_upstream(capturing_route(
        "/chat/completions",
        captured.clone(),
        json!({ "choices": [{ "message": { "content": "ok" } }] }),
    ))
    .await;
    let provider = OpenAiProvider::new(client(), base_url, "gpt-test", None);

    provider.complete("p").await.expect("complete");

    let (auth, _) = captured.lock().expect("lock").clone().expect("request seen");
    assert_eq!(auth, None);
}

#[tokio::test]
async fn openai_maps_non_success_status() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base_url = spawn_upstream(router).await;
    let provider = OpenAiProvider::new(client(), base_url, "gpt-test", None);

    let err = provider.complete("p").await.unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn openai_rejects_missing_choices() {
    let captured: Captured = Arc::default();
    let base_url = spawn_upstream(capturing_route(
        "/chat/completions",
        captured,
        json!({ "choices": [] }),
    ))
    .await;
    let provider = OpenAiProvider::new(client(), base_url, "gpt-test", None);

    let err = provider.complete("p").await.unwrap_err();
    assert!(matches!(err, ProviderError::MalformedResponse(_)));
}

#[tokio::test]
async fn huggingface_posts_inputs_to_model_route() {
    let captured: Captured = Arc::default();
    let base_url = spawn_upstream(capturing_route(
        "/models/acme/tiny",
        captured.clone(),
        json!([{ "generated_text": "Tiny but mighty" }]),
    ))
    .await;
    let provider = HuggingFaceProvider::new(
        client(),
        base_url,
        "acme/tiny",
        Some("hf-key".to_string()),
    );

    let text = provider.complete("prompt text").await.expect("complete");

    assert_eq!(text, "Tiny but mighty");
    let (auth, body) = captured.lock().expect("lock").clone().expect("request seen");
    assert_eq!(auth.as_deref(), Some("Bearer hf-key"));
    assert_eq!(body, json!({ "inputs": "prompt text" }));
}

#[tokio::test]
async fn unreachable_upstream_is_an_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let provider = OpenAiProvider::new(client(), format!("http://{addr}"), "gpt-test", None);

    let err = provider.complete("p").await.unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)));
}
