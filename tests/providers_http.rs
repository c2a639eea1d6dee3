use provider_switch::{
    AnthropicProvider, ChatProvider, ChatRequest, Error, OpenAIProvider, OpenRouterProvider, Usage,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load test fixture from file
fn load_fixture(filename: &str) -> String {
    let path = format!("{}/tests/fixtures/{filename}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load test fixture: {path}"))
}

fn json_response(status: u16, body: String) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_string(body)
        .insert_header("content-type", "application/json")
}

const MESSAGE: &str = "Hello, can you help me with a coding question?";

#[tokio::test]
async fn test_openai_wire_format_and_first_choice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-openai-test"))
        .and(body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": MESSAGE}]
        })))
        .respond_with(json_response(200, load_fixture("openai_chat_completion.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new_with_base_url(format!("{}/v1", mock_server.uri())).unwrap();
    let request = ChatRequest::user("gpt-3.5-turbo", MESSAGE, Some("sk-openai-test".into()));

    let response = provider.send(&request).await.expect("mocked call should succeed");
    assert_eq!(response.provider, "OpenAI");
    assert_eq!(response.model.as_deref(), Some("gpt-3.5-turbo-0125"));
    assert!(response
        .first_choice_text()
        .unwrap()
        .starts_with("Of course! I'd be happy to help"));
    assert_eq!(response.usage, Usage { input_tokens: 18, output_tokens: 29 });
}

#[tokio::test]
async fn test_anthropic_wire_format_and_first_choice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_json(json!({
            "model": "claude-3-haiku-20240307",
            "max_tokens": 1024,
            "messages": [{"role": "user", "content": MESSAGE}]
        })))
        .respond_with(json_response(200, load_fixture("anthropic_message.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new_with_base_url(format!("{}/v1", mock_server.uri())).unwrap();
    let request = ChatRequest::user("claude-3-haiku-20240307", MESSAGE, Some("sk-ant-test".into()));

    let response = provider.send(&request).await.expect("mocked call should succeed");
    assert_eq!(response.provider, "Anthropic");
    assert!(response
        .first_choice_text()
        .unwrap()
        .starts_with("Absolutely, I'd be glad to help"));
    assert_eq!(response.usage, Usage { input_tokens: 19, output_tokens: 31 });
}

#[tokio::test]
async fn test_openrouter_wire_format_and_first_choice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-or-test"))
        .and(header("x-title", "provider-switch"))
        .and(body_json(json!({
            "model": "anthropic/claude-3-haiku",
            "messages": [{"role": "user", "content": MESSAGE}]
        })))
        .respond_with(json_response(200, load_fixture("openrouter_chat_completion.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider =
        OpenRouterProvider::new_with_base_url(format!("{}/api/v1", mock_server.uri())).unwrap();
    let request = ChatRequest::user("anthropic/claude-3-haiku", MESSAGE, Some("sk-or-test".into()));

    let response = provider.send(&request).await.expect("mocked call should succeed");
    assert_eq!(response.provider, "Openrouter");
    assert!(response.first_choice_text().unwrap().starts_with("Sure thing!"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(json_response(
            401,
            json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}})
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new_with_base_url(mock_server.uri()).unwrap();
    let request = ChatRequest::user("gpt-3.5-turbo", MESSAGE, Some("wrong".into()));

    match provider.send(&request).await {
        Err(Error::Auth(message)) => assert_eq!(message, "OpenAI: Incorrect API key provided"),
        other => panic!("Expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_overloaded_maps_to_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(json_response(
            529,
            json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}})
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new_with_base_url(mock_server.uri()).unwrap();
    let request = ChatRequest::user("claude-3-haiku-20240307", MESSAGE, Some("sk-ant".into()));

    let err = provider.send(&request).await.unwrap_err();
    match err {
        Error::Provider { provider, status, message } => {
            assert_eq!(provider, "Anthropic");
            assert_eq!(status, 529);
            assert_eq!(message, "Overloaded");
        }
        other => panic!("Expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_with_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(json_response(
            200,
            json!({"error": {"message": "Provider returned error", "code": 502}}).to_string(),
        ))
        .mount(&mock_server)
        .await;

    let provider = OpenRouterProvider::new_with_base_url(mock_server.uri()).unwrap();
    let request = ChatRequest::user("anthropic/claude-3-haiku", MESSAGE, Some("sk-or".into()));

    let err = provider.send(&request).await.unwrap_err();
    assert!(
        matches!(err, Error::Provider { ref message, .. } if message == "Provider returned error")
    );
}

#[tokio::test]
async fn test_garbage_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let provider = OpenAIProvider::new_with_base_url(mock_server.uri()).unwrap();
    let request = ChatRequest::user("gpt-3.5-turbo", MESSAGE, Some("sk".into()));

    let err = provider.send(&request).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { ref provider, .. } if provider == "OpenAI"));
}

#[tokio::test]
async fn test_anthropic_body_missing_content_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(json_response(200, json!({"id": "msg_1"}).to_string()))
        .mount(&mock_server)
        .await;

    let provider = AnthropicProvider::new_with_base_url(mock_server.uri()).unwrap();
    let request = ChatRequest::user("claude-3-haiku-20240307", MESSAGE, Some("sk-ant".into()));

    let err = provider.send(&request).await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Grab a free port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let provider = OpenAIProvider::new_with_base_url(format!("http://127.0.0.1:{port}")).unwrap();
    let request = ChatRequest::user("gpt-3.5-turbo", MESSAGE, Some("sk".into()));

    let err = provider.send(&request).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let providers: Vec<Box<dyn ChatProvider>> = vec![
        Box::new(OpenAIProvider::new_with_base_url(mock_server.uri()).unwrap()),
        Box::new(AnthropicProvider::new_with_base_url(mock_server.uri()).unwrap()),
        Box::new(OpenRouterProvider::new_with_base_url(mock_server.uri()).unwrap()),
    ];

    for provider in &providers {
        let request = ChatRequest::user("any-model", MESSAGE, Some("".into()));
        let err = provider.send(&request).await.unwrap_err();
        assert!(matches!(err, Error::Auth(_)), "{} should reject a blank key", provider.name());
    }
}
