use super::*;

// =============================================================
// PeerId
// =============================================================

#[test]
fn peer_id_from_string_and_number_compare_equal() {
    let from_text: PeerId = serde_json::from_str("\"42\"").expect("string id");
    let from_int: PeerId = serde_json::from_str("42").expect("int id");
    let from_float: PeerId = serde_json::from_str("42.0").expect("float id");
    assert_eq!(from_text, from_int);
    assert_eq!(from_int, from_float);
    assert_eq!(from_int, PeerId::new("42"));
}

#[test]
fn peer_id_trims_whitespace() {
    assert_eq!(PeerId::new("  7 "), PeerId::new("7"));
    assert_eq!(PeerId::new(" 7 ").to_string(), "7");
}

#[test]
fn peer_id_rejects_fractional_and_structured_values() {
    assert!(serde_json::from_str::<PeerId>("4.5").is_err());
    assert!(serde_json::from_str::<PeerId>("{}").is_err());
    assert!(serde_json::from_str::<PeerId>("null").is_err());
}

#[test]
fn peer_id_rejects_floats_beyond_exact_integer_range() {
    assert!(serde_json::from_str::<PeerId>("1e20").is_err());
    assert!(serde_json::from_str::<PeerId>("2e20").is_err());
    assert!(serde_json::from_str::<PeerId>("-1e300").is_err());
    let edge: PeerId = serde_json::from_str("9007199254740992.0").expect("exact float id");
    assert_eq!(edge, PeerId::new("9007199254740992"));
}

// =============================================================
// Outbound events
// =============================================================

#[test]
fn text_event_serializes_as_envelope() {
    let event = ClientEvent::Text {
        msg: "hi".to_owned(),
        room: "chat_1_2".to_owned(),
        receiver_id: PeerId::new("2"),
    };
    let json: serde_json::Value = serde_json::from_str(&encode_client_event(&event).expect("encode")).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "event": "text",
            "data": {"msg": "hi", "room": "chat_1_2", "receiver_id": "2"}
        })
    );
}

#[test]
fn event_names_match_envelope_tags() {
    let room = "r".to_owned();
    let peer = PeerId::new("9");
    let events = [
        ClientEvent::Join { room: room.clone() },
        ClientEvent::Text { msg: "m".to_owned(), room: room.clone(), receiver_id: peer.clone() },
        ClientEvent::Image { image_data: "d".to_owned(), room: room.clone(), receiver_id: peer.clone() },
        ClientEvent::Audio { audio_data: "d".to_owned(), room: room.clone(), receiver_id: peer.clone() },
        ClientEvent::Typing { room: room.clone() },
        ClientEvent::StopTyping { room: room.clone() },
        ClientEvent::RequestReveal { room, receiver_id: peer },
    ];
    for event in &events {
        let json = serde_json::to_value(event).expect("serialize");
        assert_eq!(json["event"], event.name());
    }
}

// =============================================================
// Inbound events
// =============================================================

#[test]
fn decode_message_with_numeric_sender() {
    let text = r#"{"event":"message","data":{"msg":"yo","user":"Ann","sender_id":3,"type":"text"}}"#;
    let event = decode_server_event(text).expect("decode").expect("known event");
    assert_eq!(
        event,
        ServerEvent::Message(IncomingMessage {
            sender_id: PeerId::new("3"),
            kind: MessageKind::Text,
            msg: "yo".to_owned(),
            user: Some("Ann".to_owned()),
        })
    );
}

#[test]
fn decode_payloadless_events_with_or_without_data() {
    assert_eq!(
        decode_server_event(r#"{"event":"stop_typing"}"#).expect("decode"),
        Some(ServerEvent::StopTyping)
    );
    assert_eq!(
        decode_server_event(r#"{"event":"reveal_profiles","data":{}}"#).expect("decode"),
        Some(ServerEvent::RevealProfiles)
    );
}

#[test]
fn decode_typing_reveal_and_status() {
    assert_eq!(
        decode_server_event(r#"{"event":"typing","data":{"user":"Ann"}}"#).expect("decode"),
        Some(ServerEvent::Typing { user: "Ann".to_owned() })
    );
    assert_eq!(
        decode_server_event(r#"{"event":"reveal_requested","data":{"requester_name":"Bo"}}"#).expect("decode"),
        Some(ServerEvent::RevealRequested { requester_name: "Bo".to_owned() })
    );
    assert_eq!(
        decode_server_event(r#"{"event":"status","data":{"msg":"Ann has entered the chat."}}"#).expect("decode"),
        Some(ServerEvent::Status { msg: "Ann has entered the chat.".to_owned() })
    );
}

#[test]
fn decode_unknown_event_is_ignored() {
    assert_eq!(decode_server_event(r#"{"event":"match_found","data":{}}"#).expect("decode"), None);
}

#[test]
fn decode_rejects_unknown_message_type_and_garbage() {
    let bad_kind = r#"{"event":"message","data":{"msg":"x","sender_id":1,"type":"video"}}"#;
    assert!(matches!(decode_server_event(bad_kind), Err(ClientError::Decode(_))));
    assert!(matches!(decode_server_event("not json"), Err(ClientError::Decode(_))));
}

// =============================================================
// HTTP payloads
// =============================================================

#[test]
fn question_accepts_server_id_field() {
    let q: Question = serde_json::from_str(r#"{"id":2,"text":"Cats or Dogs?","options":["Dogs","Cats"]}"#)
        .expect("question");
    assert_eq!(q.index, 2);
    assert_eq!(q.options, vec!["Dogs".to_owned(), "Cats".to_owned()]);
}

#[test]
fn submit_body_wraps_answer_map() {
    let mut answers = AnswerSet::new();
    answers.toggle(1, "B");
    let json = serde_json::to_value(SubmitAnswersBody { answers: &answers }).expect("serialize");
    assert_eq!(json, serde_json::json!({"answers": {"1": ["B"]}}));
}
