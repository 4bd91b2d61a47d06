//! WebSocket client for the chat room channel.
//!
//! The channel client owns the socket lifecycle: connect, join the room,
//! decode server events into [`ChatState`], and reconnect with capped
//! exponential backoff. Outbound events are queued on an unbounded channel so
//! UI handlers never touch the socket directly; events sent while the socket
//! is down wait in the queue until the next connection.
//!
//! All socket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Decode and transport failures are logged and never surface to the page;
//! the reconnect loop is the recovery path.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use crate::consts::CHANNEL_PATH;
use crate::net::types::ClientEvent;
use crate::state::chat::ChatAction;
#[cfg(feature = "csr")]
use crate::state::chat::ChatState;

/// Cloneable handle for queueing outbound channel events.
#[derive(Clone, Debug, Default)]
pub struct ChannelSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChannelSender {
    /// Queue one event. Returns `false` if it could not be encoded or the
    /// client has shut down.
    pub fn send(&self, event: &ClientEvent) -> bool {
        let text = match crate::net::types::encode_client_event(event) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("dropping {} event: {err}", event.name());
                return false;
            }
        };
        #[cfg(feature = "csr")]
        {
            self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(text).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            false
        }
    }
}

/// WebSocket URL for the page served from `protocol` + `host`.
#[must_use]
pub fn channel_url(protocol: &str, host: &str) -> String {
    let scheme = if protocol.starts_with("https") { "wss" } else { "ws" };
    format!("{scheme}://{host}{CHANNEL_PATH}")
}

/// Execute controller side effects.
pub fn perform(actions: Vec<ChatAction>, sender: &ChannelSender) {
    for action in actions {
        match action {
            ChatAction::Emit(event) => {
                if !sender.send(&event) {
                    log::warn!("channel closed; {} event not sent", event.name());
                }
            }
            ChatAction::PlayCue(cue) => crate::util::audio::play_cue(cue),
            ChatAction::Alert(message) => crate::util::dom::alert(&message),
            ChatAction::UnblurProfile => crate::util::dom::set_profile_blurred(false),
        }
    }
}

/// Spawn the channel client lifecycle as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_channel_client(chat: leptos::prelude::RwSignal<ChatState>) -> ChannelSender {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    let sender = ChannelSender { tx: Some(tx) };
    leptos::task::spawn_local(channel_loop(chat, sender.clone(), rx));
    sender
}

#[cfg(feature = "csr")]
async fn channel_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    sender: ChannelSender,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Update;

    use crate::util::backoff::{Backoff, Reconnect};

    let mut rx = rx;
    let mut reconnect = Reconnect::new(Backoff::RECONNECT);

    loop {
        chat.update(ChatState::on_connecting);

        let location = web_sys::window().map(|w| w.location());
        let protocol = location.as_ref().and_then(|l| l.protocol().ok()).unwrap_or_default();
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:5000".to_owned());
        let url = channel_url(&protocol, &host);

        match connect_and_run(&url, chat, &sender, &mut rx, &mut reconnect).await {
            Ok(()) => log::info!("channel disconnected"),
            Err(e) => log::warn!("channel error: {e}"),
        }

        chat.update(ChatState::on_disconnected);

        let delay = reconnect.next_delay_ms();
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay))).await;
    }
}

/// Connect, join, and pump frames until either direction ends.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    sender: &ChannelSender,
    rx: &mut futures::channel::mpsc::UnboundedReceiver<String>,
    reconnect: &mut crate::util::backoff::Reconnect,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};
    use leptos::prelude::{Update, WithUntracked};

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;

    // The join goes out ahead of anything queued while disconnected. The
    // sink holds the send until the handshake settles, so the socket state
    // afterwards tells whether the server was actually reached.
    let join = chat.with_untracked(ChatState::join_event);
    let text = crate::net::types::encode_client_event(&join).map_err(|e| e.to_string())?;
    ws.send(Message::Text(text)).await.map_err(|e| e.to_string())?;
    if !matches!(ws.state(), State::Open) {
        return Err(format!("handshake with {url} failed"));
    }

    log::info!("channel connected to {url}");
    reconnect.established();
    chat.update(ChatState::on_connected);

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => dispatch(&text, chat, sender),
                Ok(Message::Bytes(_)) => log::warn!("ignoring binary channel frame"),
                Err(e) => {
                    log::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}

#[cfg(feature = "csr")]
fn dispatch(text: &str, chat: leptos::prelude::RwSignal<ChatState>, sender: &ChannelSender) {
    use leptos::prelude::Update;

    match crate::net::types::decode_server_event(text) {
        Ok(Some(event)) => {
            let mut actions = Vec::new();
            chat.update(|c| actions = c.apply_server_event(event));
            perform(actions, sender);
        }
        Ok(None) => log::debug!("ignoring unhandled channel event"),
        Err(e) => log::warn!("bad channel frame: {e}"),
    }
}
