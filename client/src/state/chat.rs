//! Chat controller state: transcript, composer, presence, and reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The channel client feeds decoded server events into
//! [`ChatState::apply_server_event`]; components call the `submit_*` and
//! `*_event` methods on user input. Every method returns the side effects it
//! needs as [`ChatAction`]s, which `net::channel::perform` executes, so the
//! whole controller is exercised without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::consts::MICROPHONE_REQUIRED_MESSAGE;
use crate::net::types::{ClientEvent, IncomingMessage, MessageKind, PeerId, ServerEvent};
use crate::state::page::ChatPageConfig;
use crate::state::reveal::RevealState;
use crate::util::audio::Cue;

/// Channel connection lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
    /// Server notices such as "X has entered the chat."
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    /// Image URL or data URI.
    Image(String),
    /// Audio URL or data URI.
    Audio(String),
    Notice(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Local render key, unique within one page load.
    pub id: u64,
    pub direction: Direction,
    pub body: MessageBody,
    pub author: Option<String>,
}

/// Side effects requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    Emit(ClientEvent),
    PlayCue(Cue),
    Alert(String),
    /// Remove the blur from the host page's profile card.
    UnblurProfile,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    config: ChatPageConfig,
    pub messages: Vec<ChatMessage>,
    /// Current contents of the message input.
    pub draft: String,
    /// Peer currently typing, if any.
    pub typing_user: Option<String>,
    pub reveal: RevealState,
    pub connection: ConnectionStatus,
    /// Audio gate passed for this browser session.
    pub unlocked: bool,
    pub emoji_open: bool,
    next_id: u64,
}

impl ChatState {
    #[must_use]
    pub fn new(config: ChatPageConfig, unlocked: bool) -> Self {
        let reveal = RevealState::from_page(config.revealed, config.reveal_requested);
        Self {
            config,
            messages: Vec::new(),
            draft: String::new(),
            typing_user: None,
            reveal,
            connection: ConnectionStatus::Disconnected,
            unlocked,
            emoji_open: false,
            next_id: 0,
        }
    }

    fn room(&self) -> String {
        self.config.room_id.clone()
    }

    fn receiver(&self) -> PeerId {
        self.config.receiver_id.clone()
    }

    // =============================================================
    // Connection
    // =============================================================

    pub fn on_connecting(&mut self) {
        self.connection = ConnectionStatus::Connecting;
    }

    /// Sent first on every connection, including reconnects.
    #[must_use]
    pub fn join_event(&self) -> ClientEvent {
        ClientEvent::Join { room: self.room() }
    }

    /// The socket is open and the room joined.
    pub fn on_connected(&mut self) {
        self.connection = ConnectionStatus::Connected;
    }

    pub fn on_disconnected(&mut self) {
        self.connection = ConnectionStatus::Disconnected;
        self.typing_user = None;
    }

    // =============================================================
    // Outbound
    // =============================================================

    /// Send the draft as a text message. Whitespace-only drafts are left
    /// untouched and emit nothing.
    pub fn submit_text(&mut self) -> Vec<ChatAction> {
        let msg = self.draft.trim();
        if msg.is_empty() {
            return Vec::new();
        }
        let event = ClientEvent::Text { msg: msg.to_owned(), room: self.room(), receiver_id: self.receiver() };
        self.draft.clear();
        vec![ChatAction::PlayCue(Cue::Sent), ChatAction::Emit(event)]
    }

    pub fn image_actions(&self, image_data: String) -> Vec<ChatAction> {
        vec![ChatAction::Emit(ClientEvent::Image { image_data, room: self.room(), receiver_id: self.receiver() })]
    }

    pub fn audio_actions(&self, audio_data: String) -> Vec<ChatAction> {
        vec![ChatAction::Emit(ClientEvent::Audio { audio_data, room: self.room(), receiver_id: self.receiver() })]
    }

    #[must_use]
    pub fn typing_event(&self) -> ClientEvent {
        ClientEvent::Typing { room: self.room() }
    }

    #[must_use]
    pub fn stop_typing_event(&self) -> ClientEvent {
        ClientEvent::StopTyping { room: self.room() }
    }

    /// Reveal button clicked.
    pub fn request_reveal(&mut self) -> Vec<ChatAction> {
        if !self.reveal.request() {
            return Vec::new();
        }
        vec![ChatAction::Emit(ClientEvent::RequestReveal { room: self.room(), receiver_id: self.receiver() })]
    }

    /// Alert shown when microphone access fails.
    #[must_use]
    pub fn microphone_denied() -> ChatAction {
        ChatAction::Alert(MICROPHONE_REQUIRED_MESSAGE.to_owned())
    }

    // =============================================================
    // Inbound
    // =============================================================

    /// Whether a message with `sender_id` was sent by the local user.
    #[must_use]
    pub fn classify(&self, sender_id: &PeerId) -> Direction {
        if *sender_id == self.config.sender_id { Direction::Sent } else { Direction::Received }
    }

    pub fn apply_server_event(&mut self, event: ServerEvent) -> Vec<ChatAction> {
        match event {
            ServerEvent::Message(message) => self.receive_message(message),
            ServerEvent::Typing { user } => {
                self.typing_user = Some(user);
                Vec::new()
            }
            ServerEvent::StopTyping => {
                self.typing_user = None;
                Vec::new()
            }
            ServerEvent::RevealRequested { requester_name } => {
                self.reveal.peer_requested(&requester_name);
                Vec::new()
            }
            ServerEvent::RevealProfiles => {
                if self.reveal.reveal() { vec![ChatAction::UnblurProfile] } else { Vec::new() }
            }
            ServerEvent::Status { msg } => {
                self.push(Direction::System, MessageBody::Notice(msg), None);
                Vec::new()
            }
        }
    }

    fn receive_message(&mut self, message: IncomingMessage) -> Vec<ChatAction> {
        let direction = self.classify(&message.sender_id);
        let body = match message.kind {
            MessageKind::Text => MessageBody::Text(message.msg),
            MessageKind::Image => MessageBody::Image(message.msg),
            MessageKind::Audio => MessageBody::Audio(message.msg),
        };
        self.push(direction, body, message.user);
        if direction == Direction::Received { vec![ChatAction::PlayCue(Cue::Received)] } else { Vec::new() }
    }

    /// Render keys of the transcript, oldest first. Messages never change
    /// once appended, so the key list alone tells the view what to render.
    #[must_use]
    pub fn message_ids(&self) -> Vec<u64> {
        self.messages.iter().map(|m| m.id).collect()
    }

    #[must_use]
    pub fn message(&self, id: u64) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.id == id)
    }

    fn push(&mut self, direction: Direction, body: MessageBody, author: Option<String>) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, direction, body, author });
    }

    // =============================================================
    // Local UI
    // =============================================================

    /// Pass the audio gate. Returns `true` if this click changed anything.
    pub fn unlock(&mut self) -> bool {
        !std::mem::replace(&mut self.unlocked, true)
    }

    pub fn toggle_emoji(&mut self) {
        self.emoji_open = !self.emoji_open;
    }

    pub fn append_emoji(&mut self, emoji: &str) {
        self.draft.push_str(emoji);
    }

    #[must_use]
    pub fn typing_label(&self) -> Option<String> {
        self.typing_user.as_ref().map(|user| format!("{user} is typing..."))
    }
}
