//! Small dot reflecting the chat channel connection.

use leptos::prelude::*;

use crate::state::chat::{ChatState, ConnectionStatus};

fn badge_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connection-badge connection-badge--connected",
        ConnectionStatus::Connecting => "connection-badge connection-badge--connecting",
        ConnectionStatus::Disconnected => "connection-badge connection-badge--disconnected",
    }
}

fn badge_title(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Disconnected => "Reconnecting soon",
    }
}

#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let status = move || chat.with(|c| c.connection);

    view! { <span class=move || badge_class(status()) title=move || badge_title(status())></span> }
}
