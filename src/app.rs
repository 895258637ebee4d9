//! Root application module.
//!
//! Contains the main App component and the AppContext that ties the core
//! session manager, conversation and saved-recipes store to Leptos signals.

use leptos::prelude::*;
use sous_core::{
    Conversation, Recipe, RecipeBackend, SavedRecipe, SavedRecipes, SessionManager, StorageError,
};

use crate::api::HttpBackend;
use crate::components::{ChatPanel, RecipePanel, SavedList};
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::utils::{WebStorage, dom};

/// Saved recipes live in localStorage so they survive restarts.
fn saved_store() -> SavedRecipes<WebStorage> {
    SavedRecipes::new(WebStorage::Local)
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by children with
/// `use_context::<AppContext>()`. All fields are signals, so the struct is
/// `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Identifier sent with every `/ask` request from this tab.
    pub session_id: StoredValue<String>,
    /// Transcript and current recipe card.
    pub conversation: RwSignal<Conversation>,
    /// Mirror of the saved-recipes store.
    pub saved: RwSignal<Vec<SavedRecipe>>,
    /// Last storage problem shown to the user.
    pub notice: RwSignal<Option<String>>,
}

impl AppContext {
    /// Creates the context, resolving the tab's session identifier and
    /// loading saved recipes.
    pub fn new() -> Self {
        let session = SessionManager::new(WebStorage::Session);
        let session_id = session.session_id();
        if let Some(e) = session.take_persist_error() {
            dom::warn(&format!("Session id not persisted: {}", e));
        }

        let ctx = Self {
            session_id: StoredValue::new(session_id),
            conversation: RwSignal::new(Conversation::new()),
            saved: RwSignal::new(Vec::new()),
            notice: RwSignal::new(None),
        };
        ctx.refresh_saved();
        ctx
    }

    /// Send a chat message to the backend.
    ///
    /// Blank input, or input while a reply is pending, is ignored.
    pub fn send_message(&self, input: String) {
        let session_id = self.session_id.get_value();
        let mut request = None;
        self.conversation
            .update(|c| request = c.begin_turn(&input, &session_id));
        let Some(request) = request else { return };

        let conversation = self.conversation;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = HttpBackend::default().ask(request).await;
            let mut failure = None;
            conversation.update(|c| failure = c.finish_turn(outcome));
            if let Some(e) = failure {
                dom::error(&format!("Error contacting backend: {}", e));
            }
        });
    }

    /// Whether a recipe with this exact name is saved.
    pub fn is_saved(&self, name: &str) -> bool {
        self.saved.with(|list| list.iter().any(|r| r.name() == name))
    }

    /// Save the recipe if absent, remove it if present.
    pub fn toggle_saved(&self, recipe: Recipe) {
        match saved_store().toggle(&recipe) {
            Ok(_) => self.refresh_saved(),
            Err(e) => self.report(&e),
        }
    }

    /// Remove a saved recipe by name.
    pub fn remove_saved(&self, name: &str) {
        match saved_store().remove(name) {
            Ok(()) => self.refresh_saved(),
            Err(e) => self.report(&e),
        }
    }

    /// Show a saved recipe in the recipe panel.
    pub fn open_saved(&self, name: &str) {
        match saved_store().get(name) {
            Ok(Some(saved)) => self.conversation.update(|c| c.show_recipe(saved.recipe)),
            // Removed in another tab since the list was loaded
            Ok(None) => self.refresh_saved(),
            Err(e) => self.report(&e),
        }
    }

    /// Reload the saved list from storage.
    pub fn refresh_saved(&self) {
        match saved_store().list() {
            Ok(list) => {
                self.saved.set(list);
                self.notice.set(None);
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&self, error: &StorageError) {
        dom::warn(&format!("Saved recipes: {}", error));
        self.notice
            .set(Some(format!("Couldn't update saved recipes: {}", error)));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, then lays out the chat,
/// the current recipe card and the saved list.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let notice = move || {
        ctx.notice
            .get()
            .map(|text| view! { <p class="notice" role="alert">{text}</p> })
    };

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div class="fatal">
                <h1>"Something went wrong"</h1>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect::<Vec<_>>()
                    }
                </ul>
            </div>
        }>
            <main class="container">
                <header>
                    <h1>"Chat with " {APP_NAME}</h1>
                    <p>{APP_TAGLINE}</p>
                </header>
                {notice}
                <div class="columns">
                    <ChatPanel />
                    <RecipePanel />
                </div>
                <SavedList />
            </main>
        </ErrorBoundary>
    }
}
