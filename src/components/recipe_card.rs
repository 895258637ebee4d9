//! Recipe card with a save/remove toggle.

use leptos::prelude::*;
use sous_core::Recipe;

use crate::app::AppContext;

/// Card for the recipe currently in the conversation, if any.
#[component]
pub fn RecipePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || {
        ctx.conversation
            .with(|c| c.recipe().cloned())
            .map(|recipe| view! { <RecipeCard recipe=recipe /> })
    }
}

/// Ingredients and steps of one recipe.
///
/// The heart button saves the recipe, or removes it when already saved.
#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let name = recipe.name.clone();
    let saved = Signal::derive(move || ctx.is_saved(&name));

    let toggle_recipe = recipe.clone();
    let handle_toggle = move |_| ctx.toggle_saved(toggle_recipe.clone());

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| view! { <li>{ingredient.display()}</li> })
        .collect_view();
    let steps = recipe
        .steps
        .iter()
        .map(|step| view! { <li>{step.clone()}</li> })
        .collect_view();

    view! {
        <article class="recipe-card">
            <header>
                <h2>{recipe.name}</h2>
                <button
                    type="button"
                    on:click=handle_toggle
                    title=move || if saved.get() { "Remove from saved" } else { "Save recipe" }
                >
                    {move || if saved.get() { "♥" } else { "♡" }}
                </button>
            </header>
            <h3>"Ingredients"</h3>
            <ul>{ingredients}</ul>
            <h3>"Steps"</h3>
            <ol>{steps}</ol>
        </article>
    }
}
