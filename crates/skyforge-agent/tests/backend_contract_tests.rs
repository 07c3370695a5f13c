//! Contract tests for the two model backend variants against a fake HTTP
//! endpoint.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skyforge_agent::{
    AgentError, ChatCompletionBackend, CompletionBackend, InvokeOptions, ModelBackend,
};

#[tokio::test]
async fn completion_backend_reads_first_content_segment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/invoke"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "completion text"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = CompletionBackend::new(
        format!("{}/invoke", server.uri()),
        "test-model".to_string(),
        None,
        None,
    )
    .unwrap();

    let text = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "completion text");
}

#[tokio::test]
async fn completion_backend_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = CompletionBackend::new(
        server.uri(),
        "test-model".to_string(),
        Some("secret".to_string()),
        None,
    )
    .unwrap();

    backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn completion_backend_maps_service_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let backend =
        CompletionBackend::new(server.uri(), "test-model".to_string(), None, None).unwrap();

    let err = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap_err();
    match err {
        AgentError::Backend(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("boom"));
        }
        other => panic!("expected a backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn completion_backend_rejects_shapeless_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let backend =
        CompletionBackend::new(server.uri(), "test-model".to_string(), None, None).unwrap();

    let err = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn chat_backend_reads_choices_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "chat text"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        ChatCompletionBackend::new(server.uri(), "nim-model".to_string(), None, None).unwrap();

    let text = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "chat text");
}

#[tokio::test]
async fn chat_backend_falls_back_to_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generated_text": "fallback text"
        })))
        .mount(&server)
        .await;

    let backend =
        ChatCompletionBackend::new(server.uri(), "nim-model".to_string(), None, None).unwrap();

    let text = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "fallback text");
}

#[tokio::test]
async fn chat_backend_returns_raw_body_for_unknown_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"surprise": 1})))
        .mount(&server)
        .await;

    let backend =
        ChatCompletionBackend::new(server.uri(), "nim-model".to_string(), None, None).unwrap();

    let text = backend
        .invoke("hello", &InvokeOptions::default())
        .await
        .unwrap();
    assert!(text.contains("surprise"));
}
