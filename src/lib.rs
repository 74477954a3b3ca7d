//! A small recipe and ingredient domain model.
//!
//! Build [`Ingredient`] values, collect them into a [`Recipe`] together with
//! ordered preparation steps, and query whether the recipe is vegetarian.

pub mod config;
pub mod error;
pub mod ingredient;
pub mod recipe;

pub use config::{load_config, IngredientDefinition, RecipeBoxConfig, RecipeDefinition};
pub use error::RecipeError;
pub use ingredient::Ingredient;
pub use recipe::Recipe;
