//! Recipe data model.

use serde::{Deserialize, Serialize};

/// A single ingredient line, e.g. "2 cups" of "flour".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }

    pub fn with_quantity(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
        }
    }

    /// Display form for a card: "2 cups flour", or just "salt".
    pub fn display(&self) -> String {
        match self.quantity.as_deref().filter(|q| !q.is_empty()) {
            Some(quantity) => format!("{} {}", quantity, self.name),
            None => self.name.clone(),
        }
    }
}

/// A recipe as generated by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps in order.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        steps: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            steps,
        }
    }
}

/// A recipe bookmarked in local storage, keyed by its name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "savedAt")]
    pub saved_at: u64,
}

impl SavedRecipe {
    pub fn name(&self) -> &str {
        &self.recipe.name
    }
}
