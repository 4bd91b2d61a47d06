//! Page controllers mounted onto server-rendered host containers.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its controller state and background tasks and delegates
//! rendering details to `components`.

pub mod chat;
pub mod questionnaire;
