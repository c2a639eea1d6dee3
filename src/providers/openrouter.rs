//! Openrouter aggregator.
//!
//! Speaks the OpenAI Chat Completions wire format; model identifiers are
//! namespaced by upstream vendor (e.g. `anthropic/claude-3-haiku`).

use crate::provider::ChatProvider;
use crate::{ChatRequest, ChatResponse, Error, OpenAIProvider};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Openrouter provider, a thin wrapper over [`OpenAIProvider`].
#[derive(Debug)]
pub struct OpenRouterProvider {
    inner: OpenAIProvider,
}

impl OpenRouterProvider {
    pub fn new() -> Result<Self, Error> {
        Self::new_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn new_with_base_url(base_url: String) -> Result<Self, Error> {
        // Openrouter attributes traffic to the calling app via X-Title
        let inner = OpenAIProvider::compatible("Openrouter", base_url)?
            .with_header("x-title", env!("CARGO_PKG_NAME"))?;
        Ok(Self { inner })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        self.inner.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openrouter_identity() {
        let provider = OpenRouterProvider::new().unwrap();
        assert_eq!(provider.name(), "Openrouter");
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    }
}
