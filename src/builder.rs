use crate::config::GeneratorConfig;
use crate::error::RemixError;
use crate::generate_recipe_with_provider;
use crate::model::{Recipe, RecipeRequest};
use crate::providers::ProviderFactory;

/// Builder for configuring and executing a recipe generation
#[derive(Debug, Default)]
pub struct RecipeRemixBuilder {
    dish: Option<String>,
    constraints: Vec<String>,
    servings: Option<u32>,
    provider: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl RecipeRemixBuilder {
    /// Set the dish to reinvent
    ///
    /// # Example
    /// ```
    /// use recipe_remix::RecipeRemix;
    ///
    /// let builder = RecipeRemix::builder()
    ///     .dish("Carbonara");
    /// ```
    pub fn dish(mut self, dish: impl Into<String>) -> Self {
        self.dish = Some(dish.into());
        self
    }

    /// Add one dietary constraint; call repeatedly to stack them
    ///
    /// # Example
    /// ```
    /// use recipe_remix::RecipeRemix;
    ///
    /// let builder = RecipeRemix::builder()
    ///     .dish("Carbonara")
    ///     .constraint("vegan")
    ///     .constraint("gluten-free");
    /// ```
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Set the number of servings (defaults to 1)
    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set the provider by name ("openai" or "demo")
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set the API key directly instead of relying on environment variables
    /// or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point an OpenAI-compatible provider at a different host
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the request and execute the generation
    ///
    /// # Errors
    /// Returns `RemixError` if no dish was specified or the provider could
    /// not be constructed. Generation failures do not surface here; they come
    /// back as a recipe-shaped error payload.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_remix::RecipeRemix;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeRemix::builder()
    ///     .dish("Carbonara")
    ///     .constraint("lactose-free")
    ///     .generate()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(self) -> Result<Recipe, RemixError> {
        let dish = self
            .dish
            .ok_or_else(|| RemixError::BuilderError("no dish specified. Use .dish()".to_string()))?;
        if dish.trim().is_empty() {
            return Err(RemixError::BuilderError("dish cannot be empty".to_string()));
        }

        let mut config = GeneratorConfig::default();
        if let Some(provider) = self.provider {
            config.provider = provider;
        }
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }

        let request = RecipeRequest {
            dish,
            constraints: self.constraints,
            servings: self.servings.unwrap_or(1),
        };

        let provider = ProviderFactory::create(&config)?;
        Ok(generate_recipe_with_provider(provider.as_ref(), &request).await)
    }
}

/// Main entry point for the builder API
pub struct RecipeRemix;

impl RecipeRemix {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use recipe_remix::RecipeRemix;
    ///
    /// let builder = RecipeRemix::builder();
    /// ```
    pub fn builder() -> RecipeRemixBuilder {
        RecipeRemixBuilder::default()
    }
}
