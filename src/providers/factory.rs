use log::warn;

use crate::config::GeneratorConfig;
use crate::error::RemixError;
use crate::providers::{DemoProvider, OpenAIProvider, RecipeProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration.
    ///
    /// When the configured provider needs an API key and none is available
    /// anywhere, this falls back to the demo provider instead of failing, so
    /// a fresh checkout works without credentials.
    pub fn create(config: &GeneratorConfig) -> Result<Box<dyn RecipeProvider>, RemixError> {
        match config.provider.as_str() {
            "demo" => Ok(Box::new(DemoProvider)),
            "openai" => {
                if config.resolved_api_key().is_none() {
                    warn!("no API key configured, serving demo recipes");
                    return Ok(Box::new(DemoProvider));
                }
                Ok(Box::new(OpenAIProvider::new(config)?))
            }
            other => Err(RemixError::UnknownProvider(other.to_string())),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "demo"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_openai_provider() {
        let config = GeneratorConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };

        let provider = ProviderFactory::create(&config).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_demo_provider() {
        let config = GeneratorConfig {
            provider: "demo".to_string(),
            ..Default::default()
        };

        let provider = ProviderFactory::create(&config).unwrap();
        assert_eq!(provider.provider_name(), "demo");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = GeneratorConfig {
            provider: "llamacpp".to_string(),
            ..Default::default()
        };

        let result = ProviderFactory::create(&config);
        assert!(matches!(result, Err(RemixError::UnknownProvider(_))));
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert!(providers.contains(&"openai"));
        assert!(providers.contains(&"demo"));
    }
}
