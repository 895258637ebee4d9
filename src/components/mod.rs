//! UI components built with Leptos.
//!
//! - [`ChatPanel`] - Transcript and message input
//! - [`RecipePanel`] - Current recipe card with save toggle
//! - [`SavedList`] - Saved recipes with open/remove actions

mod chat;
mod recipe_card;
mod saved;

pub use chat::ChatPanel;
pub use recipe_card::RecipePanel;
pub use saved::SavedList;
