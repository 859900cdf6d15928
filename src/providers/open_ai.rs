use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::GeneratorConfig;
use crate::error::RemixError;
use crate::model::{Recipe, RecipeRequest};
use crate::providers::{build_recipe_prompt, RecipeProvider, RECIPE_SYSTEM_PROMPT};

/// Default endpoint: Groq's OpenAI-compatible API. The wire format is the
/// OpenAI one, so `base_url` can point this provider at any compatible host.
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new provider from configuration
    pub fn new(config: &GeneratorConfig) -> Result<Self, RemixError> {
        // Try config first, then fall back to environment variables
        let api_key = config.resolved_api_key().ok_or_else(|| {
            RemixError::GenerationError(
                "API key not found in config or environment".to_string(),
            )
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Create a new provider with simple parameters
    pub fn with_api_key(api_key: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            temperature: 0.6,
            max_tokens: 2000,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.6,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl RecipeProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &RecipeRequest) -> Result<Recipe, RemixError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": RECIPE_SYSTEM_PROMPT},
                    {"role": "user", "content": build_recipe_prompt(request)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens,
                "response_format": {"type": "json_object"}
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                RemixError::GenerationError("no content in model response".to_string())
            })?;

        serde_json::from_str(content).map_err(|e| {
            RemixError::GenerationError(format!("model returned invalid recipe JSON: {e}"))
        })
    }
}
