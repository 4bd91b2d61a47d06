//! "<name> is typing..." line under the transcript.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let label = move || chat.with(ChatState::typing_label);

    view! {
        <div id="typing-indicator" class="typing-indicator" class:hidden=move || label().is_none()>
            {move || label().unwrap_or_default()}
        </div>
    }
}
