use super::*;

fn config() -> ChatPageConfig {
    ChatPageConfig {
        room_id: "chat_3_8".to_owned(),
        sender_id: PeerId::new("3"),
        receiver_id: PeerId::new("8"),
        revealed: false,
        reveal_requested: false,
    }
}

fn incoming(sender: &str, kind: MessageKind, msg: &str) -> ServerEvent {
    ServerEvent::Message(IncomingMessage {
        sender_id: PeerId::new(sender),
        kind,
        msg: msg.to_owned(),
        user: Some("Ann".to_owned()),
    })
}

fn emitted(actions: &[ChatAction]) -> Vec<&ClientEvent> {
    actions
        .iter()
        .filter_map(|a| match a {
            ChatAction::Emit(event) => Some(event),
            _ => None,
        })
        .collect()
}

// =============================================================
// Text
// =============================================================

#[test]
fn submit_emits_trimmed_text_once_and_clears_draft() {
    let mut chat = ChatState::new(config(), true);
    chat.draft = "  hello there \n".to_owned();
    let actions = chat.submit_text();

    assert_eq!(
        emitted(&actions),
        vec![&ClientEvent::Text {
            msg: "hello there".to_owned(),
            room: "chat_3_8".to_owned(),
            receiver_id: PeerId::new("8"),
        }]
    );
    assert!(actions.contains(&ChatAction::PlayCue(Cue::Sent)));
    assert!(chat.draft.is_empty());
}

#[test]
fn whitespace_draft_is_left_alone() {
    let mut chat = ChatState::new(config(), true);
    chat.draft = " \t ".to_owned();
    assert!(chat.submit_text().is_empty());
    assert_eq!(chat.draft, " \t ");
}

// =============================================================
// Inbound messages
// =============================================================

#[test]
fn classification_uses_normalized_ids() {
    let chat = ChatState::new(config(), true);
    assert_eq!(chat.classify(&PeerId::new(" 3")), Direction::Sent);
    let numeric: PeerId = serde_json::from_str("3").expect("id");
    assert_eq!(chat.classify(&numeric), Direction::Sent);
    assert_eq!(chat.classify(&PeerId::new("8")), Direction::Received);
}

#[test]
fn received_message_plays_cue_and_renders_by_kind() {
    let mut chat = ChatState::new(config(), true);
    let actions = chat.apply_server_event(incoming("8", MessageKind::Image, "/uploads/a.png"));
    assert_eq!(actions, vec![ChatAction::PlayCue(Cue::Received)]);

    let msg = chat.messages.last().expect("message");
    assert_eq!(msg.direction, Direction::Received);
    assert_eq!(msg.body, MessageBody::Image("/uploads/a.png".to_owned()));
    assert_eq!(msg.author.as_deref(), Some("Ann"));
}

#[test]
fn own_echo_is_sent_and_silent() {
    let mut chat = ChatState::new(config(), true);
    let actions = chat.apply_server_event(incoming("3", MessageKind::Text, "hi"));
    assert!(actions.is_empty());
    assert_eq!(chat.messages[0].direction, Direction::Sent);
    assert_eq!(chat.messages[0].body, MessageBody::Text("hi".to_owned()));
}

#[test]
fn audio_renders_as_audio() {
    let mut chat = ChatState::new(config(), true);
    chat.apply_server_event(incoming("8", MessageKind::Audio, "/uploads/v.webm"));
    assert_eq!(chat.messages[0].body, MessageBody::Audio("/uploads/v.webm".to_owned()));
}

#[test]
fn message_ids_are_unique() {
    let mut chat = ChatState::new(config(), true);
    chat.apply_server_event(incoming("8", MessageKind::Text, "a"));
    chat.apply_server_event(ServerEvent::Status { msg: "Ann has entered the chat.".to_owned() });
    chat.apply_server_event(incoming("3", MessageKind::Text, "b"));
    let ids: Vec<u64> = chat.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(chat.messages[1].direction, Direction::System);
}

// =============================================================
// Media, typing, connection
// =============================================================

#[test]
fn media_events_carry_room_and_receiver() {
    let chat = ChatState::new(config(), true);
    let image = chat.image_actions("data:image/png;base64,AA==".to_owned());
    assert_eq!(
        emitted(&image),
        vec![&ClientEvent::Image {
            image_data: "data:image/png;base64,AA==".to_owned(),
            room: "chat_3_8".to_owned(),
            receiver_id: PeerId::new("8"),
        }]
    );
    let audio = chat.audio_actions("data:audio/webm;base64,AA==".to_owned());
    assert_eq!(emitted(&audio).len(), 1);
}

#[test]
fn typing_indicator_follows_latest_event() {
    let mut chat = ChatState::new(config(), true);
    chat.apply_server_event(ServerEvent::Typing { user: "Ann".to_owned() });
    assert_eq!(chat.typing_label().as_deref(), Some("Ann is typing..."));
    chat.apply_server_event(ServerEvent::StopTyping);
    assert_eq!(chat.typing_label(), None);
    assert_eq!(chat.typing_event(), ClientEvent::Typing { room: "chat_3_8".to_owned() });
    assert_eq!(chat.stop_typing_event(), ClientEvent::StopTyping { room: "chat_3_8".to_owned() });
}

#[test]
fn every_connect_rejoins_room() {
    let mut chat = ChatState::new(config(), true);
    let join = ClientEvent::Join { room: "chat_3_8".to_owned() };
    chat.on_connecting();
    assert_eq!(chat.join_event(), join);
    chat.on_connected();
    assert_eq!(chat.connection, ConnectionStatus::Connected);
    chat.on_disconnected();
    assert_eq!(chat.connection, ConnectionStatus::Disconnected);
    assert_eq!(chat.join_event(), join);
}

// =============================================================
// Reveal, gate, emoji
// =============================================================

#[test]
fn reveal_requests_once_then_unblurs_once() {
    let mut chat = ChatState::new(config(), true);
    assert_eq!(emitted(&chat.request_reveal()).len(), 1);
    assert!(chat.request_reveal().is_empty());

    assert_eq!(chat.apply_server_event(ServerEvent::RevealProfiles), vec![ChatAction::UnblurProfile]);
    assert!(chat.apply_server_event(ServerEvent::RevealProfiles).is_empty());
}

#[test]
fn already_revealed_page_never_unblurs_again() {
    let mut cfg = config();
    cfg.revealed = true;
    let mut chat = ChatState::new(cfg, true);
    assert!(chat.request_reveal().is_empty());
    assert!(chat.apply_server_event(ServerEvent::RevealProfiles).is_empty());
}

#[test]
fn unlock_and_emoji() {
    let mut chat = ChatState::new(config(), false);
    assert!(chat.unlock());
    assert!(!chat.unlock());

    chat.toggle_emoji();
    assert!(chat.emoji_open);
    chat.draft = "hey ".to_owned();
    chat.append_emoji("😀");
    assert_eq!(chat.draft, "hey 😀");
}

#[test]
fn microphone_denial_alerts() {
    assert_eq!(
        ChatState::microphone_denied(),
        ChatAction::Alert("Microphone access is required for voice messages.".to_owned())
    );
}

#[test]
fn draft_edits_leave_transcript_keys_alone() {
    let mut chat = ChatState::new(config(), true);
    chat.apply_server_event(incoming("8", MessageKind::Image, "data:image/png;base64,AAAA"));
    chat.apply_server_event(ServerEvent::Status { msg: "Ann has entered the chat.".to_owned() });
    let before = chat.message_ids();
    assert_eq!(before.len(), 2);

    chat.draft.push('h');
    chat.append_emoji("🙂");
    assert_eq!(chat.message_ids(), before);

    let first = chat.message(before[0]).expect("image message");
    assert_eq!(first.body, MessageBody::Image("data:image/png;base64,AAAA".to_owned()));
    assert!(chat.message(u64::MAX).is_none());
}
