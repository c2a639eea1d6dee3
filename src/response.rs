//! Provider-neutral completion responses.

use crate::types::Message;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: Message,
}

/// A complete response from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// Name of the provider that produced it.
    pub provider: String,
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatResponse {
    /// The text content of the first choice.
    ///
    /// Empty content is a valid result; a response with no choices is not.
    pub fn first_choice_text(&self) -> Result<&str, Error> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| Error::malformed(&self.provider, "response contained no choices"))
    }
}
