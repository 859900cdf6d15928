use std::env;

use recipe_remix::{generate_recipe, load_store, suggest_substitute, AppConfig, RecipeRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("substitute") => {
            let ingredient = args
                .get(2)
                .ok_or("Usage: recipe-remix substitute <ingredient>")?;

            let store = load_store(&config.store)?;
            let result = suggest_substitute(&store, ingredient);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Some("generate") => {
            let dish = args
                .get(2)
                .ok_or("Usage: recipe-remix generate <dish> [constraint...]")?;

            let mut request = RecipeRequest::new(dish.as_str());
            request.constraints = args[3..].to_vec();

            let recipe = generate_recipe(&config.provider, &request).await?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        _ => {
            return Err("Usage: recipe-remix <substitute|generate> ...".into());
        }
    }

    Ok(())
}
