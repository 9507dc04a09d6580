/// Integration tests for the chat completion and currency clients against mock servers
use enzo::{
    config::{CompletionConfig, CurrencyConfig, OpenAIConfig},
    conversation::{process_turn, Conversation},
    currency::{CurrencyConverter, HttpCurrencyConverter},
    error::AppError,
    models::openai::ChatMessage,
    providers::OpenAIClient,
    translation::build_system_prompt,
};
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn openai_config(server: &MockServer) -> OpenAIConfig {
    OpenAIConfig {
        api_key: "sk-test-key".to_string(),
        base_url: format!("{}/v1", server.uri()),
        timeout_seconds: 5,
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 20, "completion_tokens": 4, "total_tokens": 24}
    })
}

#[tokio::test]
async fn test_translation_turn_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4",
            "max_tokens": 2000,
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "Good morning"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Bonjour")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAIClient::new(openai_config(&server)).unwrap();
    let prompt = build_system_prompt("French", "General Translation", None).unwrap();
    let mut conversation = Conversation::with_instruction(prompt.clone());

    let reply = process_turn(
        &mut conversation,
        &client,
        "gpt-4",
        &CompletionConfig::default(),
        "Good morning",
    )
    .await
    .unwrap();

    assert_eq!(reply, "Bonjour");
    assert_eq!(
        conversation.messages(),
        &[
            ChatMessage::system(prompt),
            ChatMessage::user("Good morning"),
            ChatMessage::assistant("Bonjour"),
        ]
    );
}

#[tokio::test]
async fn test_upstream_error_leaves_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let client = OpenAIClient::new(openai_config(&server)).unwrap();
    let mut conversation = Conversation::with_instruction("Translate.");

    let err = process_turn(
        &mut conversation,
        &client,
        "gpt-4",
        &CompletionConfig::default(),
        "Hello",
    )
    .await
    .unwrap_err();

    match err {
        AppError::UpstreamError { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("Expected UpstreamError, got {:?}", other),
    }
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages()[1], ChatMessage::user("Hello"));
}

#[tokio::test]
async fn test_response_without_choices_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-empty",
            "model": "gpt-4",
            "choices": []
        })))
        .mount(&server)
        .await;

    let client = OpenAIClient::new(openai_config(&server)).unwrap();
    let mut conversation = Conversation::with_instruction("Translate.");

    let err = process_turn(
        &mut conversation,
        &client,
        "gpt-4",
        &CompletionConfig::default(),
        "Hello",
    )
    .await
    .unwrap_err();

    assert!(err.is_upstream());
    assert_eq!(conversation.len(), 2);
}

#[tokio::test]
async fn test_currency_conversion_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("from", "USD"))
        .and(query_param("to", "EUR"))
        .and(query_param("amount", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "amount": 60.0,
            "base": "USD",
            "date": "2026-10-16",
            "rates": {"EUR": 55.2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let converter = HttpCurrencyConverter::new(CurrencyConfig {
        base_url: server.uri(),
        ..CurrencyConfig::default()
    })
    .unwrap();

    let converted = converter.convert("USD", "eur", 60.0).await.unwrap();
    assert_eq!(converted, 55.2);
}

#[tokio::test]
async fn test_currency_conversion_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let converter = HttpCurrencyConverter::new(CurrencyConfig {
        base_url: server.uri(),
        ..CurrencyConfig::default()
    })
    .unwrap();

    let err = converter.convert("USD", "XYZ", 1.0).await.unwrap_err();
    assert!(err.is_upstream());
}
