//! Chat panel: transcript plus message input.

use leptos::{ev, prelude::*};
use sous_core::{ChatMessage, Role};

use crate::app::AppContext;
use crate::config::INPUT_PLACEHOLDER;

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = match message.role {
        Role::User => "msg user",
        Role::Assistant => "msg assistant",
    };

    view! {
        <div class=class>
            <div class="bubble">{message.text}</div>
        </div>
    }
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let (input_value, set_input_value) = signal(String::new());

    let pending = move || ctx.conversation.with(|c| c.is_pending());

    // Keep the newest message in view
    Effect::new(move || {
        ctx.conversation.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = input_value.get();
        if value.trim().is_empty() {
            return;
        }
        ctx.send_message(value);
        set_input_value.set(String::new());
    };

    let messages = move || {
        ctx.conversation.with(|c| {
            c.messages()
                .iter()
                .cloned()
                .map(|message| view! { <MessageBubble message=message /> })
                .collect_view()
        })
    };

    view! {
        <section class="chat">
            <div node_ref=list_ref class="chat-scroll">
                {messages}
                <Show when=pending fallback=|| ()>
                    <div class="msg assistant typing">"…"</div>
                </Show>
            </div>
            <form class="chat-form" on:submit=handle_submit>
                <input
                    type="text"
                    autocomplete="off"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=input_value
                    prop:disabled=pending
                    on:input=move |ev| set_input_value.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=pending>"Send"</button>
            </form>
        </section>
    }
}
