use thiserror::Error;

/// Errors that can occur when calling a chat completion provider.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider error: {provider} ({status}) - {message}")]
    Provider {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn provider(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn malformed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth(message.into())
    }

    /// Map a non-success HTTP status and body into an error.
    pub(crate) fn from_status(provider: &str, status: u16, body: &str) -> Self {
        let message = extract_error_message(body);
        match status {
            401 | 403 => Error::Auth(format!("{provider}: {message}")),
            _ => Error::provider(provider, status, message),
        }
    }
}

/// Pull `error.message` out of a JSON error envelope, falling back to the raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
