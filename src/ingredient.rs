use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::IngredientDefinition;
use crate::error::{require_name, RecipeError};

/// A named ingredient with a vegetarian classification.
///
/// Both fields are fixed at construction; there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IngredientDefinition")]
pub struct Ingredient {
    name: String,
    vegetarian: bool,
}

impl Ingredient {
    /// Create a vegetarian ingredient
    ///
    /// Empty or whitespace-only names are rejected with `InvalidArgument`.
    ///
    /// # Example
    /// ```
    /// use recipe_box::Ingredient;
    ///
    /// let tomato = Ingredient::new("Tomato").unwrap();
    /// assert!(tomato.is_vegetarian());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, RecipeError> {
        Self::with_vegetarian(name, true)
    }

    /// Create an ingredient with an explicit vegetarian flag
    ///
    /// # Example
    /// ```
    /// use recipe_box::Ingredient;
    ///
    /// let beef = Ingredient::with_vegetarian("Beef", false).unwrap();
    /// assert!(!beef.is_vegetarian());
    /// ```
    pub fn with_vegetarian(
        name: impl Into<String>,
        vegetarian: bool,
    ) -> Result<Self, RecipeError> {
        let name = require_name("Ingredient", name.into())?;
        debug!("Created ingredient '{}' (vegetarian: {})", name, vegetarian);
        Ok(Self { name, vegetarian })
    }

    /// The ingredient's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the ingredient is vegetarian
    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }
}
