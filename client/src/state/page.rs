//! Page configuration read from the host container's `data-*` attributes.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::error::ClientError;
use crate::net::types::PeerId;

/// Configuration of a `.chat-container`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPageConfig {
    pub room_id: String,
    pub sender_id: PeerId,
    pub receiver_id: PeerId,
    /// Profiles were already revealed when the page rendered.
    pub revealed: bool,
    /// The local user already requested a reveal before this page load.
    pub reveal_requested: bool,
}

impl ChatPageConfig {
    /// Parse from a dataset lookup keyed by camelCase names (`roomId`, ...).
    ///
    /// # Errors
    ///
    /// Fails when a required id is missing or blank, or a flag is not a boolean.
    pub fn from_dataset(get: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let room_id = required(&get, "roomId", "room-id")?;
        let sender_id = PeerId::new(&required(&get, "senderId", "sender-id")?);
        let receiver_id = PeerId::new(&required(&get, "receiverId", "receiver-id")?);
        let revealed = flag(&get, "revealed", "revealed")?;
        let reveal_requested = flag(&get, "revealRequested", "reveal-requested")?;
        Ok(Self { room_id, sender_id, receiver_id, revealed, reveal_requested })
    }
}

/// Configuration of a `.questionnaire-container`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionnairePageConfig {
    pub total_questions: usize,
}

impl QuestionnairePageConfig {
    /// # Errors
    ///
    /// Fails when `data-total-questions` is missing, not an integer, or zero.
    pub fn from_dataset(get: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let raw = required(&get, "totalQuestions", "total-questions")?;
        match raw.parse::<usize>() {
            Ok(total_questions) if total_questions > 0 => Ok(Self { total_questions }),
            _ => Err(ClientError::InvalidAttribute { name: "total-questions", value: raw }),
        }
    }
}

fn required(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    attr: &'static str,
) -> Result<String, ClientError> {
    let value = get(key).map(|v| v.trim().to_owned()).unwrap_or_default();
    if value.is_empty() {
        return Err(ClientError::MissingAttribute(attr));
    }
    Ok(value)
}

fn flag(get: &impl Fn(&str) -> Option<String>, key: &str, attr: &'static str) -> Result<bool, ClientError> {
    let Some(raw) = get(key) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "none" | "" => Ok(false),
        _ => Err(ClientError::InvalidAttribute { name: attr, value: raw }),
    }
}
