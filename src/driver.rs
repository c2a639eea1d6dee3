//! Sequential demonstration of every configured provider.

use crate::caller::ProviderCaller;
use crate::factory::SwitchConfig;
use std::io::{self, Write};
use tracing::info;

/// Message sent to every provider by the demo binary.
pub const DEMO_MESSAGE: &str = "Hello, can you help me with a coding question?";

/// Number of characters of a response shown in the preview.
pub const PREVIEW_CHARS: usize = 100;

/// First [`PREVIEW_CHARS`] characters of `text`, followed by `...`.
///
/// The ellipsis is appended whatever the length of `text`.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Tries each caller in order, regardless of earlier outcomes.
#[derive(Debug)]
pub struct Driver {
    callers: Vec<ProviderCaller>,
}

impl Driver {
    pub fn new(callers: Vec<ProviderCaller>) -> Self {
        Self { callers }
    }

    /// Build one caller per configured provider.
    ///
    /// A provider with an unusable configuration still gets its step; the
    /// problem is reported when that step runs.
    pub fn from_config(config: &SwitchConfig) -> Self {
        let callers = config
            .providers
            .iter()
            .map(ProviderCaller::from_config)
            .collect();
        Self::new(callers)
    }

    pub fn callers(&self) -> &[ProviderCaller] {
        &self.callers
    }

    /// Send `message` through every caller, reporting progress to `out`.
    ///
    /// Returns each caller's result in order. Provider failures never make
    /// this fail; only writing to `out` can.
    pub async fn run<W: Write>(&self, message: &str, out: &mut W) -> io::Result<Vec<Option<String>>> {
        writeln!(out, "Testing different AI providers...\n")?;

        let mut results = Vec::with_capacity(self.callers.len());
        for (step, caller) in self.callers.iter().enumerate() {
            writeln!(out, "{}. Trying {}:", step + 1, caller.step_label())?;
            info!(step = step + 1, provider = %caller.provider_name(), model = %caller.model(), "trying provider");

            let result = caller.attempt(message, &mut *out).await?;
            match result.as_deref() {
                Some(text) if !text.is_empty() => writeln!(out, "Response: {}\n", preview(text))?,
                // Empty content is shown like a failure
                _ => writeln!(out, "Failed\n")?,
            }
            results.push(result);
        }

        Ok(results)
    }
}
