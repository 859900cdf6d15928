mod demo;
mod factory;
mod open_ai;
mod prompt;

pub use demo::DemoProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_recipe_prompt, RECIPE_SYSTEM_PROMPT};

use async_trait::async_trait;

use crate::error::RemixError;
use crate::model::{Recipe, RecipeRequest};

/// Unified trait for recipe generation backends
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "demo")
    fn provider_name(&self) -> &str;

    /// Generate a constraint-aware recipe for the request
    async fn generate(&self, request: &RecipeRequest) -> Result<Recipe, RemixError>;
}
