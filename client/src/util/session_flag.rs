//! Session-scoped "audio unlocked" flag.
//!
//! Stored in `sessionStorage` so the audio gate shows once per tab session.
//! Storage access is best effort: private browsing modes may refuse it, in
//! which case the gate simply shows again on the next page.

#[cfg(test)]
#[path = "session_flag_test.rs"]
mod session_flag_test;

#[cfg(feature = "csr")]
use crate::consts::AUDIO_UNLOCKED_KEY;

const UNLOCKED_VALUE: &str = "true";

fn is_unlocked(stored: Option<&str>) -> bool {
    stored == Some(UNLOCKED_VALUE)
}

/// Whether the user already unlocked audio in this tab session.
pub fn read_audio_unlocked() -> bool {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item(AUDIO_UNLOCKED_KEY).ok().flatten());
        is_unlocked(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        is_unlocked(None)
    }
}

/// Persist the unlock for the rest of the tab session.
pub fn store_audio_unlocked() {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            log::warn!("sessionStorage unavailable; audio gate will show again");
            return;
        };
        if let Err(err) = storage.set_item(AUDIO_UNLOCKED_KEY, UNLOCKED_VALUE) {
            log::warn!("could not store audio unlock: {}", crate::error::describe_js(&err));
        }
    }
}
