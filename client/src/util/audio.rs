//! Sound cues and looping background music.
//!
//! Playback is best effort: browsers reject `play()` until the page has seen
//! a user gesture, and a missing asset must never break chat or navigation.
//! Every failure is logged and dropped.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

use crate::consts::{CUE_VOLUME, POP_CUE_SRC, RECEIVED_CUE_SRC, SENT_CUE_SRC};
#[cfg(feature = "csr")]
use crate::consts::{BACKGROUND_MUSIC_SRC, MUSIC_VOLUME};

/// Short notification sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Sent,
    Received,
    /// Answer bubble clicked.
    Pop,
}

impl Cue {
    #[must_use]
    pub fn src(self) -> &'static str {
        match self {
            Self::Sent => SENT_CUE_SRC,
            Self::Received => RECEIVED_CUE_SRC,
            Self::Pop => POP_CUE_SRC,
        }
    }

    #[must_use]
    pub fn volume(self) -> f64 {
        CUE_VOLUME
    }
}

/// Tracks the single autoplay retry allowed after the browser blocks music.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayRetry {
    armed: bool,
    used: bool,
}

impl AutoplayRetry {
    /// Autoplay was rejected. Returns `true` if a click retry should be armed.
    pub fn blocked(&mut self) -> bool {
        if self.used || self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// A click arrived. Returns `true` exactly once, after `blocked`.
    pub fn take(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.used = true;
        true
    }
}

/// Play a cue from the start. Failures are logged.
pub fn play_cue(cue: Cue) {
    #[cfg(feature = "csr")]
    {
        match web_sys::HtmlAudioElement::new_with_src(cue.src()) {
            Ok(audio) => {
                audio.set_volume(cue.volume());
                play(&audio, cue.src());
            }
            Err(err) => log::warn!("cue {cue:?} unavailable: {}", crate::error::describe_js(&err)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cue;
    }
}

#[cfg(feature = "csr")]
fn play(audio: &web_sys::HtmlAudioElement, label: &'static str) {
    let Ok(promise) = audio.play() else {
        log::warn!("play() threw for {label}");
        return;
    };
    leptos::task::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::warn!("playback of {label} failed: {}", crate::error::describe_js(&err));
        }
    });
}

/// Start looping background music. If autoplay is blocked, the first click
/// anywhere on the page retries once.
#[cfg(feature = "csr")]
pub fn start_background_music() -> Option<web_sys::HtmlAudioElement> {
    use std::cell::Cell;
    use std::rc::Rc;

    let audio = match web_sys::HtmlAudioElement::new_with_src(BACKGROUND_MUSIC_SRC) {
        Ok(audio) => audio,
        Err(err) => {
            log::warn!("background music unavailable: {}", crate::error::describe_js(&err));
            return None;
        }
    };
    audio.set_loop(true);
    audio.set_volume(MUSIC_VOLUME);

    let retry = Rc::new(Cell::new(AutoplayRetry::default()));
    let Ok(promise) = audio.play() else {
        log::warn!("background music play() threw");
        return Some(audio);
    };
    let element = audio.clone();
    leptos::task::spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
            return;
        }
        let mut state = retry.get();
        let arm = state.blocked();
        retry.set(state);
        if arm {
            log::info!("autoplay blocked; retrying background music on first click");
            arm_click_retry(element, retry);
        }
    });
    Some(audio)
}

#[cfg(feature = "csr")]
fn arm_click_retry(audio: web_sys::HtmlAudioElement, retry: std::rc::Rc<std::cell::Cell<AutoplayRetry>>) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_click = wasm_bindgen::closure::Closure::once_into_js(move || {
        let mut state = retry.get();
        let go = state.take();
        retry.set(state);
        if go {
            play(&audio, BACKGROUND_MUSIC_SRC);
        }
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        on_click.unchecked_ref(),
        &options,
    ) {
        log::warn!("could not arm music retry: {}", crate::error::describe_js(&err));
    }
}
