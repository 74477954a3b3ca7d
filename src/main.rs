use log::{info, warn};
use serde::Serialize;

use recipe_box::{Recipe, RecipeBoxConfig};

#[derive(Debug, Serialize)]
struct RecipeSummary<'a> {
    name: &'a str,
    vegetarian: bool,
    ingredients: Vec<&'a str>,
    steps: &'a [String],
}

impl<'a> From<&'a Recipe> for RecipeSummary<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        RecipeSummary {
            name: recipe.name(),
            vegetarian: recipe.is_vegetarian(),
            ingredients: recipe.ingredient_names(),
            steps: recipe.steps(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RecipeBoxConfig::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let recipes = config.build_recipes()?;
    if recipes.is_empty() {
        warn!("No recipes configured; add [[recipes]] entries to recipes.toml");
    }

    for recipe in &recipes {
        info!("Loaded recipe '{}'", recipe.name());
        println!(
            "{}",
            serde_json::to_string_pretty(&RecipeSummary::from(recipe))?
        );
    }

    Ok(())
}
