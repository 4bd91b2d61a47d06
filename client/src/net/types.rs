//! Wire types for the real-time channel and the question API.
//!
//! DESIGN
//! ======
//! Every channel event travels as one JSON text frame
//! `{"event": <name>, "data": <payload>}`. Outbound events serialize straight
//! from [`ClientEvent`]. Inbound frames are decoded in two steps (envelope,
//! then payload by event name) so a server that sends `{}` or omits `data`
//! for payload-less events still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;
use crate::state::answers::AnswerSet;

/// A participant identifier normalized to one canonical text form.
///
/// Host pages render ids as strings while the server sends numbers; both
/// `"42"` and `42` decode to the same `PeerId`, so comparisons never depend
/// on the source representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest magnitude a float id can have and still name exactly one integer.
const MAX_EXACT_ID: f64 = 9_007_199_254_740_992.0;

impl<'de> Deserialize<'de> for PeerId {
    #[allow(clippy::cast_possible_truncation)]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(text) => Ok(Self::new(&text)),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self(int.to_string()));
                }
                if let Some(uint) = number.as_u64() {
                    return Ok(Self(uint.to_string()));
                }
                if let Some(float) = number.as_f64()
                    && float.fract() == 0.0
                    && float.abs() <= MAX_EXACT_ID
                {
                    return Ok(Self((float as i64).to_string()));
                }
                Err(D::Error::custom("expected integer-compatible id"))
            }
            _ => Err(D::Error::custom("expected string or number id")),
        }
    }
}

/// Media carried by a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Audio,
}

/// Events the client emits on the real-time channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Join { room: String },
    Text { msg: String, room: String, receiver_id: PeerId },
    Image { image_data: String, room: String, receiver_id: PeerId },
    Audio { audio_data: String, room: String, receiver_id: PeerId },
    Typing { room: String },
    StopTyping { room: String },
    RequestReveal { room: String, receiver_id: PeerId },
}

impl ClientEvent {
    /// Channel event name, as it appears in the envelope.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Audio { .. } => "audio",
            Self::Typing { .. } => "typing",
            Self::StopTyping { .. } => "stop_typing",
            Self::RequestReveal { .. } => "request_reveal",
        }
    }
}

/// A chat message broadcast to the room.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IncomingMessage {
    pub sender_id: PeerId,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Text content, or a URL / data URI for media.
    pub msg: String,
    /// Display name of the sender, when the server includes it.
    #[serde(default)]
    pub user: Option<String>,
}

/// Events the server pushes to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerEvent {
    Message(IncomingMessage),
    Typing { user: String },
    StopTyping,
    RevealRequested { requester_name: String },
    RevealProfiles,
    Status { msg: String },
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TypingPayload {
    user: String,
}

#[derive(Deserialize)]
struct RevealRequestedPayload {
    requester_name: String,
}

#[derive(Deserialize)]
struct StatusPayload {
    msg: String,
}

/// Encode an outbound event as one text frame.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if serialization fails.
pub fn encode_client_event(event: &ClientEvent) -> Result<String, ClientError> {
    Ok(serde_json::to_string(event)?)
}

/// Decode one inbound text frame.
///
/// Returns `Ok(None)` for event names this client does not handle.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] for malformed envelopes or payloads.
pub fn decode_server_event(text: &str) -> Result<Option<ServerEvent>, ClientError> {
    let Envelope { event, data } = serde_json::from_str(text)?;
    let decoded = match event.as_str() {
        "message" => ServerEvent::Message(serde_json::from_value(data)?),
        "typing" => {
            let TypingPayload { user } = serde_json::from_value(data)?;
            ServerEvent::Typing { user }
        }
        "stop_typing" => ServerEvent::StopTyping,
        "reveal_requested" => {
            let RevealRequestedPayload { requester_name } = serde_json::from_value(data)?;
            ServerEvent::RevealRequested { requester_name }
        }
        "reveal_profiles" => ServerEvent::RevealProfiles,
        "status" => {
            let StatusPayload { msg } = serde_json::from_value(data)?;
            ServerEvent::Status { msg }
        }
        _ => return Ok(None),
    };
    Ok(Some(decoded))
}

/// One questionnaire question as served by `GET /get_question/{index}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, alias = "id")]
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
}

/// Body of `POST /submit_answers`.
#[derive(Debug, Serialize)]
pub struct SubmitAnswersBody<'a> {
    pub answers: &'a AnswerSet,
}
