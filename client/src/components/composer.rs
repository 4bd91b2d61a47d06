//! Message composer: text input, emoji picker, image upload, voice button.
//!
//! Typing presence is debounced here. Each input event emits `typing` and
//! arms a fresh `gloo` timeout; replacing the stored timeout cancels the old
//! one, and [`TypingDebounce`] drops any timer that still fires late, so only
//! the newest keystroke can produce `stop_typing`. Sending a message settles
//! a pending debounce early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::consts::TYPING_DEBOUNCE_MS;
use crate::net::channel::{ChannelSender, perform};
use crate::state::chat::ChatState;
use crate::state::recorder::RecorderPhase;
use crate::state::typing::TypingDebounce;
use crate::util::media::{Recorder, RecordingHandles, read_file_data_uri, toggle_recording};

const EMOJI_CLICK_EVENT: &str = "emoji-click";

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<ChannelSender>();

    let debounce = StoredValue::new(TypingDebounce::default());
    let typing_timeout = StoredValue::new_local(None::<Timeout>);
    let recording = RecordingHandles {
        recorder: StoredValue::new_local(Recorder::new()),
        phase: RwSignal::new(RecorderPhase::Idle),
        chat,
    };
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let picker_ref = NodeRef::<leptos::html::Div>::new();
    let emoji_listener = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::Event)>>);

    let on_submit = {
        let sender = sender.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let actions = chat.try_update(ChatState::submit_text).unwrap_or_default();
            if actions.is_empty() {
                return;
            }
            perform(actions, &sender);
            if debounce.try_update_value(TypingDebounce::cancel).unwrap_or(false) {
                typing_timeout.set_value(None);
                sender.send(&chat.with_untracked(ChatState::stop_typing_event));
            }
        }
    };

    let on_input = {
        let sender = sender.clone();
        move |ev: leptos::ev::Event| {
            chat.update(|c| c.draft = event_target_value(&ev));
            sender.send(&chat.with_untracked(ChatState::typing_event));

            let Some(timer) = debounce.try_update_value(TypingDebounce::keystroke) else {
                return;
            };
            let sender = sender.clone();
            let timeout = Timeout::new(TYPING_DEBOUNCE_MS, move || {
                if debounce.try_update_value(|d| d.fire(timer)).unwrap_or(false) {
                    sender.send(&chat.with_untracked(ChatState::stop_typing_event));
                }
            });
            typing_timeout.set_value(Some(timeout));
        }
    };

    let on_pick_image = move |_| {
        if let Some(input) = file_ref.get() {
            input.click();
        }
    };

    let on_image_chosen = {
        let sender = sender.clone();
        move |_| {
            let Some(input) = file_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let sender = sender.clone();
            leptos::task::spawn_local(async move {
                match read_file_data_uri(&file).await {
                    Ok(uri) => perform(chat.with_untracked(|c| c.image_actions(uri)), &sender),
                    Err(err) => log::warn!("could not read image {}: {err}", file.name()),
                }
            });
        }
    };

    let on_voice = {
        let sender = sender.clone();
        move |_| toggle_recording(recording, sender.clone())
    };

    let on_emoji_toggle = move |_| chat.update(ChatState::toggle_emoji);

    Effect::new(move || {
        let Some(picker) = picker_ref.get() else {
            return;
        };
        if emoji_listener.with_value(Option::is_some) {
            return;
        }
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(emoji) = emoji_from_event(&event) {
                chat.update(|c| c.append_emoji(&emoji));
            }
        });
        match picker.add_event_listener_with_callback(EMOJI_CLICK_EVENT, listener.as_ref().unchecked_ref()) {
            Ok(()) => emoji_listener.set_value(Some(listener)),
            Err(err) => log::warn!("emoji picker unavailable: {}", crate::error::describe_js(&err)),
        }
    });

    let voice_class = move || {
        if recording.phase.get() == RecorderPhase::Recording { "icon-btn voice-btn recording" } else { "icon-btn voice-btn" }
    };

    view! {
        <div
            id="emoji-picker-container"
            class="emoji-picker-container"
            class:hidden=move || !chat.with(|c| c.emoji_open)
            node_ref=picker_ref
        >
            <emoji-picker></emoji-picker>
        </div>
        <form id="message-form" class="message-form" on:submit=on_submit>
            <button id="emoji-btn" class="icon-btn" type="button" on:click=on_emoji_toggle>"😊"</button>
            <button id="image-btn" class="icon-btn" type="button" on:click=on_pick_image>"📷"</button>
            <input
                id="image-input"
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_ref
                on:change=on_image_chosen
            />
            <button
                id="voice-btn"
                class=voice_class
                type="button"
                disabled=move || matches!(recording.phase.get(), RecorderPhase::Requesting | RecorderPhase::Stopping)
                on:click=on_voice
            >
                "🎤"
            </button>
            <input
                id="message-input"
                type="text"
                autocomplete="off"
                placeholder="Type a message..."
                prop:value=move || chat.with(|c| c.draft.clone())
                on:input=on_input
            />
            <button class="btn btn--primary" type="submit">"Send"</button>
        </form>
    }
}

/// Pull `detail.unicode` out of an `emoji-click` event.
fn emoji_from_event(event: &web_sys::Event) -> Option<String> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    js_sys::Reflect::get(&detail, &wasm_bindgen::JsValue::from_str("unicode")).ok()?.as_string()
}
