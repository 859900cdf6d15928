use async_trait::async_trait;

use crate::error::RemixError;
use crate::model::{Recipe, RecipeIngredient, RecipeRequest};
use crate::providers::RecipeProvider;

/// Provider used when no API key is configured. Returns a fixed placeholder
/// recipe so the rest of the pipeline can be exercised offline, including one
/// marked substitution entry.
pub struct DemoProvider;

#[async_trait]
impl RecipeProvider for DemoProvider {
    fn provider_name(&self) -> &str {
        "demo"
    }

    async fn generate(&self, request: &RecipeRequest) -> Result<Recipe, RemixError> {
        Ok(Recipe {
            title: format!("{} (demo mode)", request.dish),
            ingredients: vec![
                RecipeIngredient {
                    name: "Pasta".to_string(),
                    quantity: 100.0,
                    unit: "g".to_string(),
                    is_substitution: false,
                    original_name: None,
                },
                RecipeIngredient {
                    name: "Plant-based cream (demo)".to_string(),
                    quantity: 50.0,
                    unit: "ml".to_string(),
                    is_substitution: true,
                    original_name: Some("Cream".to_string()),
                },
            ],
            instructions: vec![
                "Configure an API key to enable live recipe generation.".to_string(),
            ],
            rationale: "Demo mode active.".to_string(),
        })
    }
}
