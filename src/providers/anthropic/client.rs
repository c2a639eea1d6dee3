use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::types::*;
use crate::provider::ChatProvider;
use crate::response::{ChatResponse, Choice, Usage};
use crate::types::Message;
use crate::{ChatRequest, Error};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic Claude provider using the Messages API directly.
#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider.
    pub fn new() -> Result<Self, Error> {
        Self::new_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Anthropic provider with custom base URL (for testing).
    pub fn new_with_base_url(base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/messages", self.base_url.trim_end_matches('/'))
    }

    /// Convert a request to Anthropic format.
    fn convert_request(request: &ChatRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: request
                .messages
                .iter()
                .map(|msg| AnthropicMessage {
                    role: msg.role.as_str().to_string(),
                    content: msg.content.clone(),
                })
                .collect(),
        }
    }

    /// Fold the content blocks into a single choice.
    fn convert_response(response: AnthropicResponse) -> ChatResponse {
        let text: String = response
            .content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.as_str()),
                AnthropicContentBlock::Other => None,
            })
            .collect();

        ChatResponse {
            provider: "Anthropic".to_string(),
            model: Some(response.model),
            choices: vec![Choice {
                index: 0,
                message: Message::assistant(text),
            }],
            usage: response.usage.map(Usage::from).unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl ChatProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic"
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        let credential = request
            .usable_credential()
            .ok_or_else(|| Error::auth("Anthropic API key is not set"))?;

        let anthropic_request = Self::convert_request(request);
        debug!(provider = "Anthropic", model = %request.model, "sending messages request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", credential.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&anthropic_request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::from_status("Anthropic", status.as_u16(), &text));
        }

        let parsed: AnthropicResponse = serde_json::from_str(&text)
            .map_err(|e| Error::malformed("Anthropic", format!("invalid JSON body: {e}")))?;

        let response = Self::convert_response(parsed);
        debug!(
            provider = "Anthropic",
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "messages request finished"
        );
        Ok(response)
    }
}
