//! Reveal-profile button and handshake status line.

use leptos::prelude::*;

use crate::net::channel::{ChannelSender, perform};
use crate::state::chat::ChatState;

#[component]
pub fn RevealPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<ChannelSender>();

    let on_reveal = move |_| {
        let actions = chat.try_update(ChatState::request_reveal).unwrap_or_default();
        perform(actions, &sender);
    };

    view! {
        <div class="reveal-panel">
            <Show when=move || chat.with(|c| c.reveal.button_visible())>
                <button
                    id="reveal-btn"
                    class="btn reveal-panel__button"
                    type="button"
                    disabled=move || chat.with(|c| c.reveal.button_disabled())
                    on:click=on_reveal.clone()
                >
                    {move || chat.with(|c| c.reveal.button_label())}
                </button>
            </Show>
            <p id="reveal-status" class="reveal-panel__status">
                {move || chat.with(|c| c.reveal.status_line()).unwrap_or_default()}
            </p>
        </div>
    }
}
