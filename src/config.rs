use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Ingredient store location and load policy
    #[serde(default)]
    pub store: StoreConfig,
    /// Recipe generation provider settings
    #[serde(default)]
    pub provider: GeneratorConfig,
}

/// Where the ingredient table lives and what to do when it cannot be loaded
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path to the serialized ingredient table
    #[serde(default = "default_store_path")]
    pub path: String,
    /// Load-failure policy: abort startup or continue with an empty table
    #[serde(default)]
    pub on_unavailable: LoadPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_store_path(),
            on_unavailable: LoadPolicy::default(),
        }
    }
}

/// Policy applied when the ingredient store cannot be loaded
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Treat a missing or corrupt store as fatal (default)
    #[default]
    Fatal,
    /// Continue with an empty store; every lookup will come back empty-handed
    Empty,
}

/// Configuration for the recipe generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Provider to use: "openai" (any OpenAI-compatible endpoint) or "demo"
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Model identifier (e.g. "llama-3.1-8b-instant", "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for the chat-completions endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            provider: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

impl GeneratorConfig {
    /// API key from config if set, otherwise from the environment.
    /// `GROQ_API_KEY` is checked first, then `OPENAI_API_KEY`.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

// Default value functions
fn default_store_path() -> String {
    "data/ingredients.json".to_string()
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

fn default_max_tokens() -> u32 {
    2000
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with REMIX__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: REMIX__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with REMIX_ prefix
            // Use double underscore for nested: REMIX__STORE__PATH
            .add_source(
                Environment::with_prefix("REMIX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_store_path(), "data/ingredients.json");
        assert_eq!(default_provider(), "openai");
        assert_eq!(default_model(), "llama-3.1-8b-instant");
        assert_eq!(default_temperature(), 0.6);
        assert_eq!(default_max_tokens(), 2000);
    }

    #[test]
    fn test_store_config_defaults_to_fatal() {
        let store = StoreConfig::default();
        assert_eq!(store.on_unavailable, LoadPolicy::Fatal);
        assert_eq!(store.path, "data/ingredients.json");
    }

    #[test]
    fn test_load_policy_deserializes_lowercase() {
        let policy: LoadPolicy = serde_json::from_str(r#""empty""#).unwrap();
        assert_eq!(policy, LoadPolicy::Empty);

        let policy: LoadPolicy = serde_json::from_str(r#""fatal""#).unwrap();
        assert_eq!(policy, LoadPolicy::Fatal);
    }

    #[test]
    fn test_resolved_api_key_prefers_config() {
        let config = GeneratorConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };

        assert_eq!(config.resolved_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_generator_config_default_has_no_key() {
        let config = GeneratorConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
        assert_eq!(config.provider, "openai");
    }
}
