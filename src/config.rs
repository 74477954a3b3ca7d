use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::RecipeError;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;

/// Top-level configuration for the recipe box
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeBoxConfig {
    /// Log filter handed to env_logger when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Recipes to build on startup
    #[serde(default)]
    pub recipes: Vec<RecipeDefinition>,
}

impl Default for RecipeBoxConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            recipes: Vec::new(),
        }
    }
}

/// Unvalidated description of a recipe, as written in configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeDefinition {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientDefinition>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Unvalidated description of an ingredient
#[derive(Debug, Deserialize, Clone)]
pub struct IngredientDefinition {
    pub name: String,
    #[serde(default = "default_vegetarian")]
    pub vegetarian: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_vegetarian() -> bool {
    true
}

impl TryFrom<IngredientDefinition> for Ingredient {
    type Error = RecipeError;

    fn try_from(definition: IngredientDefinition) -> Result<Self, Self::Error> {
        Ingredient::with_vegetarian(definition.name, definition.vegetarian)
    }
}

impl TryFrom<RecipeDefinition> for Recipe {
    type Error = RecipeError;

    fn try_from(definition: RecipeDefinition) -> Result<Self, Self::Error> {
        let ingredients = definition
            .ingredients
            .into_iter()
            .map(Ingredient::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Recipe::with_contents(definition.name, ingredients, definition.steps)
    }
}

impl RecipeBoxConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. recipes.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__LOG_LEVEL
    pub fn load() -> Result<Self, RecipeError> {
        load_config()
    }

    /// Parse configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, RecipeError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build every configured recipe, stopping at the first invalid one
    pub fn build_recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        self.recipes.iter().cloned().map(Recipe::try_from).collect()
    }
}

/// Load configuration from an optional `recipes.toml` and `RECIPES__*` environment variables
pub fn load_config() -> Result<RecipeBoxConfig, RecipeError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipes").required(false))
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert!(default_vegetarian());

        let config = RecipeBoxConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.recipes.is_empty());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RecipeBoxConfig::from_toml_str("").unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.recipes.is_empty());
    }

    #[test]
    fn test_ingredient_definition_defaults_to_vegetarian() {
        let config = RecipeBoxConfig::from_toml_str(
            r#"
            [[recipes]]
            name = "Salad"
            ingredients = [{ name = "Lettuce" }]
            "#,
        )
        .unwrap();

        let recipes = config.build_recipes().unwrap();
        assert_eq!(recipes.len(), 1);
        assert!(recipes[0].ingredients()[0].is_vegetarian());
        assert!(recipes[0].steps().is_empty());
    }

    #[test]
    fn test_invalid_ingredient_fails_the_build() {
        let definition = RecipeDefinition {
            name: "Mystery".to_string(),
            ingredients: vec![IngredientDefinition {
                name: String::new(),
                vegetarian: true,
            }],
            steps: Vec::new(),
        };

        assert!(matches!(
            Recipe::try_from(definition),
            Err(RecipeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_recipe_name_is_a_config_error() {
        let result = RecipeBoxConfig::from_toml_str(
            r#"
            [[recipes]]
            steps = ["Stir"]
            "#,
        );
        assert!(matches!(result, Err(RecipeError::ConfigError(_))));
    }

    #[test]
    fn test_wrongly_typed_recipes_is_a_config_error() {
        let result = RecipeBoxConfig::from_toml_str("recipes = 3");
        assert!(matches!(result, Err(RecipeError::ConfigError(_))));
    }

    #[test]
    fn test_load_config_env_overrides_log_level() {
        env::set_var("RECIPES__LOG_LEVEL", "warn");
        let result = load_config();
        env::remove_var("RECIPES__LOG_LEVEL");

        let config = result.unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(config.build_recipes().is_ok());
    }
}
