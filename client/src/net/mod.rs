//! Networking modules for HTTP and the real-time chat channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the questionnaire REST calls, `channel` manages the websocket
//! lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod channel;
pub mod types;
