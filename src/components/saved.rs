//! Saved recipes list.

use leptos::prelude::*;
use sous_core::SavedRecipe;

use crate::app::AppContext;
use crate::utils::format_date_iso;

#[component]
fn SavedEntry(entry: SavedRecipe) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let summary = format!(
        "{} ingredients · {} steps · saved {}",
        entry.recipe.ingredients.len(),
        entry.recipe.steps.len(),
        format_date_iso(entry.saved_at)
    );
    let name = entry.recipe.name;
    let label = name.clone();
    let open_name = name.clone();

    view! {
        <li class="saved-entry">
            <button type="button" class="link" on:click=move |_| ctx.open_saved(&open_name)>
                {label}
            </button>
            <span class="meta">{summary}</span>
            <button type="button" on:click=move |_| ctx.remove_saved(&name)>"Remove"</button>
        </li>
    }
}

#[component]
pub fn SavedList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <section class="saved">
            <h2>"Saved Recipes"</h2>
            <Show
                when=move || ctx.saved.with(|list| !list.is_empty())
                fallback=|| view! {
                    <p class="empty">"Nothing saved yet. Tap the heart on a recipe card to keep it here."</p>
                }
            >
                <ul>
                    <For
                        each=move || ctx.saved.get()
                        key=|entry| (entry.recipe.name.clone(), entry.saved_at)
                        children=|entry| view! { <SavedEntry entry=entry /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
