use super::types::{ChatCompletionsRequest, ChatCompletionsResponse, OpenAIMessage};
use crate::provider::ChatProvider;
use crate::response::{ChatResponse, Choice, Usage};
use crate::types::{Message, Role};
use crate::{ChatRequest, Error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI Chat Completions provider.
///
/// Also drives OpenAI-compatible endpoints such as Openrouter, which differ
/// only in base URL, display name and a few optional headers.
#[derive(Debug)]
pub struct OpenAIProvider {
    client: Client,
    name: String,
    base_url: String,
    headers: HeaderMap,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new() -> Result<Self, Error> {
        Self::new_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(base_url: String) -> Result<Self, Error> {
        Self::compatible("OpenAI", base_url)
    }

    /// Create a provider for an OpenAI-compatible endpoint.
    pub fn compatible(name: impl Into<String>, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            name: name.into(),
            base_url,
            headers: HeaderMap::new(),
        })
    }

    /// Attach an extra header to every request.
    pub fn with_header(mut self, name: &'static str, value: &str) -> Result<Self, Error> {
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("invalid value for header {name}: {e}")))?;
        self.headers.insert(HeaderName::from_static(name), value);
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Convert a request to the Chat Completions wire format.
    fn convert_request(request: &ChatRequest) -> ChatCompletionsRequest {
        ChatCompletionsRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| OpenAIMessage {
                    role: msg.role.as_str().to_string(),
                    content: Some(msg.content.clone()),
                })
                .collect(),
        }
    }

    /// Convert a Chat Completions response to the neutral shape.
    fn convert_response(&self, response: ChatCompletionsResponse) -> ChatResponse {
        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: Message {
                    role: match choice.message.role.as_str() {
                        "user" => Role::User,
                        _ => Role::Assistant,
                    },
                    // A choice carrying only tool calls has no text
                    content: choice.message.content.unwrap_or_default(),
                },
            })
            .collect();

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        ChatResponse {
            provider: self.name.clone(),
            model: response.model,
            choices,
            usage,
        }
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        let credential = request
            .usable_credential()
            .ok_or_else(|| Error::auth(format!("{} API key is not set", self.name)))?;

        let body = Self::convert_request(request);
        debug!(provider = %self.name, model = %request.model, "sending chat completion");

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.headers.clone())
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::from_status(&self.name, status.as_u16(), &text));
        }

        let parsed: ChatCompletionsResponse = serde_json::from_str(&text)
            .map_err(|e| Error::malformed(&self.name, format!("invalid JSON body: {e}")))?;

        if let Some(error) = parsed.error {
            return Err(Error::provider(&self.name, status.as_u16(), error.message));
        }

        let response = self.convert_response(parsed);
        debug!(
            provider = %self.name,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "chat completion finished"
        );
        Ok(response)
    }
}
