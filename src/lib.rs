pub mod config;
pub mod model;
pub mod providers;
pub mod resolver;
pub mod store;

mod builder;
mod error;

pub use builder::{RecipeRemix, RecipeRemixBuilder};
pub use config::{AppConfig, GeneratorConfig, LoadPolicy, StoreConfig};
pub use error::RemixError;
pub use model::{Recipe, RecipeIngredient, RecipeRequest};
pub use providers::{ProviderFactory, RecipeProvider};
pub use resolver::{cosine_similarity, find_substitute, SubstitutionResult};
pub use store::{IngredientRecord, IngredientStore};

use log::{error, warn};

/// Load the ingredient store according to the configured policy.
///
/// With [`LoadPolicy::Fatal`] (the default) a load failure is returned to the
/// caller; with [`LoadPolicy::Empty`] it is logged and an empty store is
/// handed back, so substitution lookups degrade to "unknown ingredient"
/// instead of aborting startup.
pub fn load_store(config: &StoreConfig) -> Result<IngredientStore, RemixError> {
    match IngredientStore::load(&config.path) {
        Ok(store) => Ok(store),
        Err(e) => match config.on_unavailable {
            LoadPolicy::Fatal => Err(e),
            LoadPolicy::Empty => {
                warn!("{e}; continuing with an empty store");
                Ok(IngredientStore::empty())
            }
        },
    }
}

/// Find the closest substitute for an ingredient in the store.
///
/// Thin wrapper over [`resolver::find_substitute`]; misses come back as
/// ordinary results, never errors.
pub fn suggest_substitute(store: &IngredientStore, ingredient: &str) -> SubstitutionResult {
    resolver::find_substitute(store, ingredient)
}

/// Generate a recipe with the provider named in the configuration.
///
/// Only provider construction can fail here; once a provider exists,
/// generation failures come back as a recipe-shaped payload, see
/// [`generate_recipe_with_provider`].
pub async fn generate_recipe(
    config: &GeneratorConfig,
    request: &RecipeRequest,
) -> Result<Recipe, RemixError> {
    let provider = ProviderFactory::create(config)?;
    Ok(generate_recipe_with_provider(provider.as_ref(), request).await)
}

/// Generate a recipe with an explicit provider.
///
/// Never fails: when the provider errors, the error is logged and folded into
/// [`Recipe::error_payload`] so the caller can render it like any other
/// result.
pub async fn generate_recipe_with_provider(
    provider: &dyn RecipeProvider,
    request: &RecipeRequest,
) -> Recipe {
    match provider.generate(request).await {
        Ok(recipe) => recipe,
        Err(e) => {
            error!("recipe generation failed: {e}");
            Recipe::error_payload(&e.to_string())
        }
    }
}
