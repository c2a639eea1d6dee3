//! A fixed request builder bound to one provider.

use crate::factory::{ProviderConfig, ProviderFactory};
use crate::{ChatProvider, ChatRequest, Credential, Error};
use std::io::Write;
use tracing::debug;

/// Sends one user message to one provider/model pair.
pub struct ProviderCaller {
    /// A provider that could not be built keeps its configuration error,
    /// reported on every call.
    provider: Result<Box<dyn ChatProvider>, String>,
    provider_name: String,
    step_label: String,
    model: String,
    credential: Option<Credential>,
}

impl ProviderCaller {
    pub fn new(
        provider: Box<dyn ChatProvider>,
        step_label: impl Into<String>,
        model: impl Into<String>,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            provider_name: provider.name().to_string(),
            provider: Ok(provider),
            step_label: step_label.into(),
            model: model.into(),
            credential,
        }
    }

    /// Build a caller from its configuration.
    ///
    /// Never fails: an unusable configuration (e.g. a malformed base URL)
    /// surfaces as an [`Error::Config`] from [`call`](Self::call).
    pub fn from_config(config: &ProviderConfig) -> Self {
        let provider = ProviderFactory::create(config).map_err(|e| match e {
            Error::Config(message) => message,
            other => other.to_string(),
        });
        if let Err(reason) = &provider {
            debug!(provider = ?config.provider_type, %reason, "provider unusable");
        }

        Self {
            provider,
            provider_name: config.provider_type.display_name().to_string(),
            step_label: config.step_label.clone(),
            model: config.model.clone(),
            credential: config.api_key.clone(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn step_label(&self) -> &str {
        &self.step_label
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `message` and return the first choice's text, or the typed error.
    pub async fn call(&self, message: &str) -> Result<String, Error> {
        let provider = self.provider.as_ref().map_err(|reason| Error::config(reason.clone()))?;
        let request = ChatRequest::user(&self.model, message, self.credential.clone());
        let response = provider.send(&request).await?;
        response.first_choice_text().map(str::to_string)
    }

    /// Like [`call`](Self::call), but a failure is reported to `out` and
    /// absorbed into `None`.
    ///
    /// Only writing the diagnostic itself can fail.
    pub async fn attempt<W: Write>(&self, message: &str, out: &mut W) -> std::io::Result<Option<String>> {
        match self.call(message).await {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                debug!(provider = %self.provider_name(), model = %self.model, error = %e, "provider call failed");
                writeln!(out, "{} Error: {e}", self.provider_name())?;
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for ProviderCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCaller")
            .field("provider", &self.provider_name())
            .field("model", &self.model)
            .field("credential", &self.credential)
            .finish()
    }
}
