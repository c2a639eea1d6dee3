//! One call shape over several chat completion providers.
//!
//! This library sends the same user message to OpenAI, Anthropic and
//! Openrouter through a common [`ChatProvider`] trait, and reports which ones
//! answered. A failing provider never stops the others from being tried.

pub mod caller;
pub mod driver;
pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use caller::ProviderCaller;
pub use driver::{preview, Driver, DEMO_MESSAGE};
pub use error::Error;
pub use factory::{ProviderConfig, ProviderFactory, ProviderType, SwitchConfig};
pub use provider::ChatProvider;
pub use providers::*;
pub use response::*;
pub use types::*;
