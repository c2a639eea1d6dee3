use crate::{ChatRequest, ChatResponse, Error};

/// A chat completion backend.
///
/// Every provider honours the same contract: one request in, one complete
/// response or a typed error out. Nothing is streamed and nothing is retried.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    /// Human-readable provider name used in diagnostics (e.g. "OpenAI").
    fn name(&self) -> &str;

    /// Submit a single completion request.
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, Error>;
}
