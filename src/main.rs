use provider_switch::{Driver, SwitchConfig, DEMO_MESSAGE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is the human-readable report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SwitchConfig::from_env();
    for provider in &config.providers {
        debug!(
            provider = ?provider.provider_type,
            model = %provider.model,
            credential_set = provider.api_key.is_some(),
            base_url = %provider.effective_base_url(),
            "provider configured"
        );
    }

    let driver = Driver::from_config(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver.run(DEMO_MESSAGE, &mut out).await?;

    Ok(())
}
