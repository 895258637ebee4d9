//! Saved-recipes store.
//!
//! Bookmarked recipes live under one storage key as a JSON array of
//! [`SavedRecipe`]. Entries are keyed by exact recipe name: saving a name that
//! already exists replaces that entry in place, so the list never holds two
//! entries with the same name.

use crate::config::SAVED_RECIPES_KEY;
use crate::error::StorageError;
use crate::recipe::{Recipe, SavedRecipe};
use crate::storage::KeyValueStorage;
use crate::time;

/// CRUD over the saved-recipes collection.
pub struct SavedRecipes<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SavedRecipes<S> {
    /// Store under [`SAVED_RECIPES_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SAVED_RECIPES_KEY)
    }

    /// Store under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// All saved recipes in insertion order.
    ///
    /// A collection that no longer parses is reported as
    /// [`StorageError::Corrupt`] and left untouched: writes go through
    /// `list` first, so they refuse to overwrite it too.
    pub fn list(&self) -> Result<Vec<SavedRecipe>, StorageError> {
        let Some(json) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&json).map_err(|_| StorageError::Corrupt(self.key.clone()))
    }

    /// Look up one entry by exact name.
    pub fn get(&self, name: &str) -> Result<Option<SavedRecipe>, StorageError> {
        Ok(self.list()?.into_iter().find(|r| r.name() == name))
    }

    /// Whether an entry with exactly this name exists (case-sensitive).
    pub fn is_saved(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.list()?.iter().any(|r| r.name() == name))
    }

    /// Save a recipe stamped with the current time.
    pub fn save(&self, recipe: &Recipe) -> Result<SavedRecipe, StorageError> {
        self.save_at(recipe, time::now_ms())
    }

    /// Save a recipe with an explicit `saved_at` timestamp.
    ///
    /// An existing entry with the same name is fully replaced at its current
    /// position. Ingredient and step lists are not merged.
    pub fn save_at(&self, recipe: &Recipe, saved_at: u64) -> Result<SavedRecipe, StorageError> {
        let entry = SavedRecipe {
            recipe: recipe.clone(),
            saved_at,
        };

        let mut entries = self.list()?;
        match entries.iter_mut().find(|r| r.name() == recipe.name) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }

        self.write(&entries)?;
        Ok(entry)
    }

    /// Remove the entry with this exact name. Absent names are a no-op.
    pub fn remove(&self, name: &str) -> Result<(), StorageError> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|r| r.name() != name);

        if entries.len() == before {
            return Ok(());
        }
        self.write(&entries)
    }

    /// Save when absent, remove when present. Returns the new saved state.
    pub fn toggle(&self, recipe: &Recipe) -> Result<bool, StorageError> {
        if self.is_saved(&recipe.name)? {
            self.remove(&recipe.name)?;
            Ok(false)
        } else {
            self.save(recipe)?;
            Ok(true)
        }
    }

    fn write(&self, entries: &[SavedRecipe]) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(entries).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(&self.key, &json)
    }
}
