use serde::{Deserialize, Serialize};

/// A single ingredient line in a generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// True when this entry replaces something the constraints ruled out
    #[serde(default)]
    pub is_substitution: bool,
    /// Name of the ingredient this one replaces, when `is_substitution` is set
    #[serde(default)]
    pub original_name: Option<String>,
}

/// A structured recipe as produced by a generation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub rationale: String,
}

impl Recipe {
    /// Recipe-shaped payload returned when generation fails. The caller renders
    /// it like any other recipe instead of special-casing an error path.
    pub fn error_payload(detail: &str) -> Self {
        Recipe {
            title: "Generation failed".to_string(),
            ingredients: Vec::new(),
            instructions: vec![format!("Error detail: {detail}")],
            rationale: "Unable to generate a recipe.".to_string(),
        }
    }
}

/// What the user asked for: a dish plus the constraints it must respect.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    pub dish: String,
    pub constraints: Vec<String>,
    pub servings: u32,
}

impl RecipeRequest {
    /// Request for one serving with no constraints.
    pub fn new(dish: impl Into<String>) -> Self {
        RecipeRequest {
            dish: dish.into(),
            constraints: Vec::new(),
            servings: 1,
        }
    }
}
