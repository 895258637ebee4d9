//! Platform-independent core of the Sous Duckling recipe chat client.
//!
//! This crate provides:
//! - [`KeyValueStorage`] - Injectable get/set/remove storage interface
//! - [`SessionManager`] - Per-tab session identifier
//! - [`SavedRecipes`] - Favorite recipes keyed by name
//! - [`Conversation`] - Chat transcript and current recipe card
//! - [`AskRequest`], [`AskResponse`] - `POST /ask` wire types

pub mod chat;
pub mod config;
pub mod error;
pub mod protocol;
pub mod recipe;
pub mod saved;
pub mod session;
pub mod storage;
pub mod time;

pub use chat::{ChatMessage, Conversation, RecipeBackend, Role};
pub use error::{FetchError, StorageError};
pub use protocol::{AskRequest, AskResponse};
pub use recipe::{Ingredient, Recipe, SavedRecipe};
pub use saved::SavedRecipes;
pub use session::SessionManager;
pub use storage::{KeyValueStorage, MemoryStorage};
