//! Compile-time client configuration.

// ── Chat ────────────────────────────────────────────────────────

/// Quiet period after the last keystroke before `stop_typing` is sent.
pub const TYPING_DEBOUNCE_MS: u32 = 2_000;

/// MIME type used for recorded voice messages.
pub const RECORDING_MIME: &str = "audio/webm";

/// Fallback MIME type for picked files the browser cannot classify.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Path of the real-time channel endpoint on the current host.
pub const CHANNEL_PATH: &str = "/socket";

/// `sessionStorage` key recording that the user unlocked audio.
pub const AUDIO_UNLOCKED_KEY: &str = "audioUnlocked";

pub const MICROPHONE_REQUIRED_MESSAGE: &str = "Microphone access is required for voice messages.";

// ── Questionnaire ───────────────────────────────────────────────

pub const SUBMIT_ANSWERS_PATH: &str = "/submit_answers";

/// Where the browser goes after answers are stored.
pub const MATCHING_PATH: &str = "/start_matching";

// ── Audio ───────────────────────────────────────────────────────

pub const SENT_CUE_SRC: &str = "/static/message_sent.mp3";
pub const RECEIVED_CUE_SRC: &str = "/static/message_received.mp3";
pub const POP_CUE_SRC: &str = "/static/bubble_pop.mp3";
pub const BACKGROUND_MUSIC_SRC: &str = "/static/background_music.mp3";

pub const CUE_VOLUME: f64 = 0.5;
pub const MUSIC_VOLUME: f64 = 0.25;
