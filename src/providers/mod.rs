//! Provider implementations for different LLM services.

pub mod anthropic;
pub mod openai;
pub mod openrouter;

// Re-export commonly used provider types
pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;
pub use openrouter::OpenRouterProvider;
