use crate::providers::{anthropic, openai, openrouter};
use crate::{AnthropicProvider, ChatProvider, Credential, Error, OpenAIProvider, OpenRouterProvider};
use std::env;

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    OpenAI,
    Anthropic,
    OpenRouter,
}

impl ProviderType {
    /// Every provider, in the order the driver tries them.
    pub const ALL: [ProviderType; 3] = [
        ProviderType::OpenAI,
        ProviderType::Anthropic,
        ProviderType::OpenRouter,
    ];

    /// Label used in diagnostics; matches the built provider's `name()`.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "OpenAI",
            ProviderType::Anthropic => "Anthropic",
            ProviderType::OpenRouter => "Openrouter",
        }
    }

    /// Environment variable holding the credential.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "OPENAI_API_KEY",
            ProviderType::Anthropic => "ANTHROPIC_API_KEY",
            ProviderType::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// Environment variable overriding the endpoint root.
    pub fn base_url_var(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "OPENAI_BASE_URL",
            ProviderType::Anthropic => "ANTHROPIC_BASE_URL",
            ProviderType::OpenRouter => "OPENROUTER_BASE_URL",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => openai::client::DEFAULT_BASE_URL,
            ProviderType::Anthropic => anthropic::client::DEFAULT_BASE_URL,
            ProviderType::OpenRouter => openrouter::DEFAULT_BASE_URL,
        }
    }
}

/// Configuration for one provider caller.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,
    /// Used in step labels, e.g. "Openrouter (non-xAI provider)".
    pub step_label: String,
    pub model: String,
    pub api_key: Option<Credential>,
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// The fixed caller configuration for a provider.
    pub fn for_type(provider_type: ProviderType, api_key: Option<Credential>) -> Self {
        match provider_type {
            ProviderType::OpenAI => Self::openai(api_key),
            ProviderType::Anthropic => Self::anthropic(api_key),
            ProviderType::OpenRouter => Self::openrouter(api_key),
        }
    }

    /// OpenAI's `gpt-3.5-turbo`.
    pub fn openai(api_key: Option<Credential>) -> Self {
        Self {
            provider_type: ProviderType::OpenAI,
            step_label: "OpenAI".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key,
            base_url: None,
        }
    }

    /// Anthropic's `claude-3-haiku-20240307`.
    pub fn anthropic(api_key: Option<Credential>) -> Self {
        Self {
            provider_type: ProviderType::Anthropic,
            step_label: "Anthropic".to_string(),
            model: "claude-3-haiku-20240307".to_string(),
            api_key,
            base_url: None,
        }
    }

    /// Claude 3 Haiku routed through Openrouter rather than xAI.
    pub fn openrouter(api_key: Option<Credential>) -> Self {
        Self {
            provider_type: ProviderType::OpenRouter,
            step_label: "Openrouter (non-xAI provider)".to_string(),
            model: "anthropic/claude-3-haiku".to_string(),
            api_key,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The endpoint root this caller will talk to.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider_type.default_base_url())
    }
}

/// The full set of callers, in the order they are tried.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    pub providers: Vec<ProviderConfig>,
}

impl SwitchConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let providers = ProviderType::ALL
            .into_iter()
            .map(|provider_type| {
                let api_key = read(provider_type.api_key_var()).map(Credential::from);
                let mut config = ProviderConfig::for_type(provider_type, api_key);
                config.base_url = read(provider_type.base_url_var());
                config
            })
            .collect();

        Self { providers }
    }
}

/// Factory for creating LLM providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn ChatProvider>, Error> {
        let base_url = config.effective_base_url().to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            Error::config(format!(
                "invalid base URL '{base_url}' for {:?}: {e}",
                config.provider_type
            ))
        })?;

        match config.provider_type {
            ProviderType::OpenAI => Ok(Box::new(OpenAIProvider::new_with_base_url(base_url)?)),
            ProviderType::Anthropic => {
                Ok(Box::new(AnthropicProvider::new_with_base_url(base_url)?))
            }
            ProviderType::OpenRouter => {
                Ok(Box::new(OpenRouterProvider::new_with_base_url(base_url)?))
            }
        }
    }
}
