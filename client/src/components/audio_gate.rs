//! Start overlay that unlocks audio before the chat is shown.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::session_flag::store_audio_unlocked;

/// Full-screen overlay shown until the user clicks start once per session.
#[component]
pub fn AudioGate() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let on_start = move |_| {
        if chat.try_update(ChatState::unlock).unwrap_or(false) {
            store_audio_unlocked();
        }
    };

    view! {
        <Show when=move || !chat.with(|c| c.unlocked)>
            <div id="audio-overlay" class="audio-overlay">
                <p class="audio-overlay__text">"Tap to start chatting with sound"</p>
                <button id="start-chat-btn" class="btn btn--primary" type="button" on:click=on_start>
                    "Start Chat"
                </button>
            </div>
        </Show>
    }
}
