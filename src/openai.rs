//! OpenAI-compatible client construction.

use crate::config::ProviderConfig;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Default timeout for chat completion requests (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Create a chat client bound to one provider's endpoint and credentials.
///
/// Uses a 5-minute timeout by default to prevent hung API calls.
pub fn create_client(config: &ProviderConfig) -> Client<OpenAIConfig> {
    create_client_with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create a chat client with a custom request timeout.
pub fn create_client_with_timeout(
    config: &ProviderConfig,
    timeout: Duration,
) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client");

    let openai_config = OpenAIConfig::new()
        .with_api_key(config.api_key.clone())
        .with_api_base(config.base_url.clone());

    Client::with_config(openai_config).with_http_client(http_client)
}
