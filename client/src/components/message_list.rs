//! Chat transcript.
//!
//! Messages render by body kind: text as a paragraph, images inline, audio
//! as a playable element. Sent and received messages carry a status tick;
//! server notices do not. The list scrolls to the newest message on every
//! append.
//!
//! The list tracks only the memoized key list, so composer edits to the
//! shared `ChatState` never re-run it or copy media payloads.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Direction, MessageBody};

fn direction_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Sent => "message sent",
        Direction::Received => "message received",
        Direction::System => "message system",
    }
}

fn render_message(message: ChatMessage) -> impl IntoView {
    let class = direction_class(message.direction);
    let tick = message.direction != Direction::System;
    let body = match message.body {
        MessageBody::Text(text) => view! { <p>{text}</p> }.into_any(),
        MessageBody::Image(src) => view! { <img class="chat-image" src=src alt="Shared image"/> }.into_any(),
        MessageBody::Audio(src) => view! { <audio controls=true src=src></audio> }.into_any(),
        MessageBody::Notice(text) => view! { <p class="message__notice">{text}</p> }.into_any(),
    };

    view! {
        <div class=class>
            {body}
            {tick.then(|| view! { <span class="status-tick">"✓"</span> })}
        </div>
    }
}

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let box_ref = NodeRef::<leptos::html::Div>::new();
    let ids = Memo::new(move |_| chat.with(ChatState::message_ids));

    Effect::new(move || {
        ids.track();
        if let Some(el) = box_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div id="chat-box" class="chat-box" node_ref=box_ref>
            <For
                each=move || ids.get()
                key=|id| *id
                children=move |id| chat.with_untracked(|c| c.message(id).cloned()).map(render_message)
            />
        </div>
    }
}
