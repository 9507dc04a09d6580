use crate::{
    config::OpenAIConfig,
    error::AppError,
    logging::SensitiveApiKey,
    models::openai::{ChatCompletionRequest, ChatCompletionResponse},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Something that can answer a chat-completion request with a single reply
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, AppError>;
}

/// Call OpenAI Chat Completions API
pub async fn chat_completions(
    client: &Client,
    config: &OpenAIConfig,
    request: &ChatCompletionRequest,
) -> Result<reqwest::Response, AppError> {
    let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(config.timeout_seconds))
        .json(request)
        .send()
        .await?;

    // Check for HTTP errors
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::UpstreamError {
            status,
            message: error_text,
        });
    }

    Ok(response)
}

/// OpenAI-compatible chat completion client
pub struct OpenAIClient {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self, AppError> {
        if config.api_key.is_empty() {
            return Err(AppError::ConfigError(
                "No OpenAI API key configured (set openai.api_key or OPENAI_API_KEY)".to_string(),
            ));
        }

        let client = Client::builder().build()?;
        debug!(
            base_url = %config.base_url,
            api_key = %SensitiveApiKey::new(&config.api_key),
            "Created OpenAI client"
        );

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChatCompletion for OpenAIClient {
    async fn complete(&self, request: ChatCompletionRequest) -> Result<String, AppError> {
        let response = chat_completions(&self.client, &self.config, &request).await?;
        let body: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &body.usage {
            debug!(
                model = %body.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion finished"
            );
        }

        body.first_content()
            .map(str::to_string)
            .ok_or_else(|| AppError::UpstreamError {
                status: StatusCode::BAD_GATEWAY,
                message: "Response contained no message content".to_string(),
            })
    }
}
