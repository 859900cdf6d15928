use recipe_remix::providers::{DemoProvider, RecipeProvider};
use recipe_remix::{generate_recipe, generate_recipe_with_provider, GeneratorConfig, RecipeRequest};

#[tokio::test]
async fn test_demo_recipe_shape() {
    let mut request = RecipeRequest::new("Carbonara");
    request.constraints = vec!["lactose-free".to_string()];

    let recipe = DemoProvider.generate(&request).await.unwrap();

    assert_eq!(recipe.title, "Carbonara (demo mode)");
    assert!(!recipe.ingredients.is_empty());
    assert!(!recipe.instructions.is_empty());
    assert_eq!(recipe.rationale, "Demo mode active.");
}

#[tokio::test]
async fn test_demo_recipe_marks_a_substitution() {
    let recipe = DemoProvider
        .generate(&RecipeRequest::new("Gratin"))
        .await
        .unwrap();

    let substitution = recipe
        .ingredients
        .iter()
        .find(|i| i.is_substitution)
        .expect("demo recipe should exercise the substitution flag");
    assert!(substitution.original_name.is_some());
}

#[tokio::test]
async fn test_no_api_key_falls_back_to_demo() {
    // No key in config; scrub the environment fallbacks too
    std::env::remove_var("GROQ_API_KEY");
    std::env::remove_var("OPENAI_API_KEY");

    let config = GeneratorConfig::default();
    let request = RecipeRequest::new("Carbonara");

    let recipe = generate_recipe(&config, &request).await.unwrap();
    assert_eq!(recipe.title, "Carbonara (demo mode)");
}

#[tokio::test]
async fn test_demo_provider_never_produces_error_payload() {
    let recipe =
        generate_recipe_with_provider(&DemoProvider, &RecipeRequest::new("Carbonara")).await;

    assert_ne!(recipe.title, "Generation failed");
}
