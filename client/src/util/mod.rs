//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod audio;
pub mod backoff;
pub mod data_uri;
pub mod dom;
#[cfg(feature = "csr")]
pub mod media;
pub mod session_flag;
