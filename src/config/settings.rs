//! Provider configuration, sourced from the environment.

use crate::error::{Result, TldwError};
use clap::ValueEnum;
use std::env;

/// Default Venice API endpoint.
const VENICE_DEFAULT_BASE_URL: &str = "https://api.venice.ai/api/v1";

/// Default Morpheus API endpoint.
const MORPHEUS_DEFAULT_BASE_URL: &str = "https://api.mor.org/api/v1";

/// Model name used with both providers.
const DEFAULT_MODEL: &str = "gpt-4o";

/// Named LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// Venice AI (default).
    #[default]
    Venice,
    /// Morpheus.
    Morpheus,
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "venice" => Ok(Provider::Venice),
            "morpheus" => Ok(Provider::Morpheus),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Venice => write!(f, "venice"),
            Provider::Morpheus => write!(f, "morpheus"),
        }
    }
}

impl Provider {
    /// Human-readable name for status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Venice => "Venice",
            Provider::Morpheus => "Morpheus",
        }
    }
}

/// One provider's endpoint settings as read from the environment.
#[derive(Debug, Clone)]
pub struct EndpointSettings {
    /// API key, if set in the environment.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
}

/// Process-wide configuration, read once at program start.
#[derive(Debug, Clone)]
pub struct Settings {
    pub venice: EndpointSettings,
    pub morpheus: EndpointSettings,
}

/// Resolved configuration for a single provider, ready for client construction.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Settings {
    /// Read settings from the environment.
    pub fn from_env() -> Self {
        Self {
            venice: EndpointSettings {
                api_key: non_empty_var("VENICE_API_KEY"),
                base_url: env::var("VENICE_BASE_URL")
                    .unwrap_or_else(|_| VENICE_DEFAULT_BASE_URL.to_string()),
            },
            morpheus: EndpointSettings {
                api_key: non_empty_var("MORPHEUS_API_KEY"),
                base_url: env::var("MORPHEUS_BASE_URL")
                    .unwrap_or_else(|_| MORPHEUS_DEFAULT_BASE_URL.to_string()),
            },
        }
    }

    /// Resolve the configuration for a provider.
    ///
    /// Fails when the provider's API key is missing, before any network call
    /// is attempted.
    pub fn provider_config(&self, provider: Provider) -> Result<ProviderConfig> {
        let (endpoint, key_var) = match provider {
            Provider::Venice => (&self.venice, "VENICE_API_KEY"),
            Provider::Morpheus => (&self.morpheus, "MORPHEUS_API_KEY"),
        };

        let api_key = endpoint.api_key.clone().ok_or_else(|| {
            TldwError::Config(format!(
                "Please set the {} environment variable.",
                key_var
            ))
        })?;

        Ok(ProviderConfig {
            api_key,
            base_url: endpoint.base_url.clone(),
            model: DEFAULT_MODEL.to_string(),
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(venice_key: Option<&str>, morpheus_key: Option<&str>) -> Settings {
        Settings {
            venice: EndpointSettings {
                api_key: venice_key.map(String::from),
                base_url: VENICE_DEFAULT_BASE_URL.to_string(),
            },
            morpheus: EndpointSettings {
                api_key: morpheus_key.map(String::from),
                base_url: MORPHEUS_DEFAULT_BASE_URL.to_string(),
            },
        }
    }

    #[test]
    fn test_provider_config_resolves_venice() {
        let config = settings(Some("vk-123"), None)
            .provider_config(Provider::Venice)
            .unwrap();

        assert_eq!(config.api_key, "vk-123");
        assert_eq!(config.base_url, "https://api.venice.ai/api/v1");
        assert_eq!(config.model, "gpt-4o");
    }

    #[test]
    fn test_provider_config_resolves_morpheus() {
        let config = settings(None, Some("mk-456"))
            .provider_config(Provider::Morpheus)
            .unwrap();

        assert_eq!(config.api_key, "mk-456");
        assert_eq!(config.base_url, "https://api.mor.org/api/v1");
    }

    #[test]
    fn test_missing_key_fails_with_env_var_name() {
        let err = settings(Some("vk-123"), None)
            .provider_config(Provider::Morpheus)
            .unwrap_err();

        assert!(matches!(err, TldwError::Config(_)));
        assert!(err.to_string().contains("MORPHEUS_API_KEY"));
    }

    #[test]
    fn test_base_url_override_is_respected() {
        let mut s = settings(Some("vk-123"), None);
        s.venice.base_url = "https://proxy.example.com/v1".to_string();

        let config = s.provider_config(Provider::Venice).unwrap();
        assert_eq!(config.base_url, "https://proxy.example.com/v1");
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("venice".parse::<Provider>().unwrap(), Provider::Venice);
        assert_eq!("Morpheus".parse::<Provider>().unwrap(), Provider::Morpheus);
        assert!("openai".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::Venice.to_string(), "venice");
        assert_eq!(Provider::Morpheus.display_name(), "Morpheus");
    }
}
