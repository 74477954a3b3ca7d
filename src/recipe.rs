use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::RecipeDefinition;
use crate::error::{require_name, RecipeError};
use crate::ingredient::Ingredient;

/// A named recipe made of ingredients and ordered preparation steps.
///
/// Ingredients and steps keep insertion order and only ever grow through
/// [`Recipe::add_ingredient`] and [`Recipe::add_step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDefinition")]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
}

impl Recipe {
    /// Create an empty recipe
    ///
    /// Empty or whitespace-only names are rejected with `InvalidArgument`.
    ///
    /// # Example
    /// ```
    /// use recipe_box::{Ingredient, Recipe};
    ///
    /// let mut soup = Recipe::new("Soup").unwrap();
    /// soup.add_ingredient(Ingredient::new("Carrot").unwrap());
    /// assert_eq!(soup.ingredients().len(), 1);
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, RecipeError> {
        Self::with_contents(name, Vec::new(), Vec::new())
    }

    /// Create a recipe that takes ownership of the given ingredients and steps
    pub fn with_contents(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        steps: Vec<String>,
    ) -> Result<Self, RecipeError> {
        let name = require_name("Recipe", name.into())?;
        debug!(
            "Created recipe '{}' with {} ingredients and {} steps",
            name,
            ingredients.len(),
            steps.len()
        );
        Ok(Self {
            name,
            ingredients,
            steps,
        })
    }

    /// The recipe's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in insertion order
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Preparation steps in insertion order
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Append an ingredient to the end of the list
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        debug!("Adding ingredient '{}' to '{}'", ingredient.name(), self.name);
        self.ingredients.push(ingredient);
    }

    /// Append a step to the end of the list
    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
        debug!("Recipe '{}' now has {} steps", self.name, self.steps.len());
    }

    /// True when every ingredient is vegetarian; an empty recipe is vegetarian.
    pub fn is_vegetarian(&self) -> bool {
        self.ingredients.iter().all(Ingredient::is_vegetarian)
    }

    /// Names of the ingredients, in recipe order.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(Ingredient::name).collect()
    }
}
