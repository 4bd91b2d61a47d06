//! Real-time chat page.

use leptos::prelude::*;

use crate::components::audio_gate::AudioGate;
use crate::components::composer::Composer;
use crate::components::connection_badge::ConnectionBadge;
use crate::components::message_list::MessageList;
use crate::components::reveal_panel::RevealPanel;
use crate::components::typing_indicator::TypingIndicator;
use crate::net::channel::spawn_channel_client;
use crate::state::chat::ChatState;
use crate::state::page::ChatPageConfig;
use crate::util::dom::set_profile_blurred;
use crate::util::session_flag::read_audio_unlocked;

/// Chat controller: owns the chat state and the channel client.
#[component]
pub fn ChatPage(config: ChatPageConfig) -> impl IntoView {
    log::info!("mounting chat for room {}", config.room_id);

    let chat = RwSignal::new(ChatState::new(config, read_audio_unlocked()));
    provide_context(chat);
    provide_context(spawn_channel_client(chat));

    if chat.with_untracked(|c| c.reveal.is_revealed()) {
        set_profile_blurred(false);
    }

    view! {
        <AudioGate/>
        <div class="chat-shell" class:hidden=move || !chat.with(|c| c.unlocked)>
            <header class="chat-shell__header">
                <ConnectionBadge/>
                <RevealPanel/>
            </header>
            <MessageList/>
            <TypingIndicator/>
            <Composer/>
        </div>
    }
}
