use serde::{Deserialize, Serialize};

/// OpenAI Chat Completions message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI Chat Completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionsRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
}

/// OpenAI Chat Completions response.
///
/// Openrouter uses the same shape, and may report an upstream failure as an
/// `error` object instead of `choices`.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // Some fields kept for debugging
pub struct ChatCompletionsResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
    #[serde(default)]
    pub error: Option<ErrorDetails>,
}

/// A choice in a Chat Completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: OpenAIMessage,
}

/// Token usage as reported by Chat Completions.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

/// Error details from OpenAI-compatible APIs.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // For error handling and debugging
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}
