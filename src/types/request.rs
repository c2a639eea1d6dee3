use std::fmt;

use super::message::Message;

/// An opaque secret authorizing calls to a provider.
///
/// `Debug` is redacted so a credential never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    /// The raw secret, for building an auth header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Credential(s)
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Credential(s.to_string())
    }
}

/// A single chat completion request, built fresh for every call.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub credential: Option<Credential>,
}

impl ChatRequest {
    /// A request carrying one user message.
    pub fn user(
        model: impl Into<String>,
        content: impl Into<String>,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            credential,
        }
    }

    /// The credential, if present and non-blank.
    pub fn usable_credential(&self) -> Option<&Credential> {
        self.credential.as_ref().filter(|c| !c.is_empty())
    }
}
