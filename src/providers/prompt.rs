use crate::model::RecipeRequest;

/// The system prompt used for constraint-aware recipe generation.
///
/// It pins the model to a strict JSON shape matching [`crate::model::Recipe`],
/// so the reply can be deserialized directly instead of being sliced out of
/// free text.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message for a generation request.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let constraints = if request.constraints.is_empty() {
        "none".to_string()
    } else {
        request.constraints.join(", ")
    };
    format!(
        "Dish: {}\nServings: {}\nStrict constraints: {}",
        request.dish, request.servings, constraints
    )
}
