//! Voice message capture lifecycle.
//!
//! One button toggles recording. Microphone acquisition and the recorder's
//! final flush are asynchronous, so the lifecycle has two transit phases:
//!
//! ```text
//!   Idle --click--> Requesting --granted--> Recording --click--> Stopping --flushed--> Idle
//!                       |                 |
//!                       +--denied--> Idle +--ended--> Idle
//! ```
//!
//! A recorder can also end on its own while `Recording` (track ended, device
//! unplugged); that path releases the microphone like a normal stop. Clicks
//! during `Requesting` or `Stopping` are ignored, so at most one capture
//! session exists. The chunk buffer is owned here and handed out
//! exactly once by [`VoiceRecorder::finish`], which also releases the
//! microphone.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

/// A live microphone capture that can be shut off.
pub trait Microphone {
    /// Stop every track of the underlying stream.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecorderPhase {
    #[default]
    Idle,
    Requesting,
    Recording,
    Stopping,
}

/// What the browser glue should do after a button click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderCommand {
    /// Ask for microphone access.
    Acquire,
    /// Stop the media recorder and wait for its final chunk.
    Stop,
    Ignore,
}

/// Output of a completed session: every chunk in capture order plus the
/// already-released microphone handle.
#[derive(Debug)]
pub struct Finished<C, M> {
    pub chunks: Vec<C>,
    pub microphone: M,
    /// The recorder ended without the user pressing stop.
    pub interrupted: bool,
}

#[derive(Debug)]
pub struct VoiceRecorder<C, M> {
    phase: RecorderPhase,
    chunks: Vec<C>,
    microphone: Option<M>,
}

impl<C, M> Default for VoiceRecorder<C, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, M> VoiceRecorder<C, M> {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: RecorderPhase::Idle, chunks: Vec::new(), microphone: None }
    }

    #[must_use]
    pub fn phase(&self) -> RecorderPhase {
        self.phase
    }

    #[must_use]
    pub fn microphone(&self) -> Option<&M> {
        self.microphone.as_ref()
    }

    pub fn toggle(&mut self) -> RecorderCommand {
        match self.phase {
            RecorderPhase::Idle => {
                self.phase = RecorderPhase::Requesting;
                RecorderCommand::Acquire
            }
            RecorderPhase::Recording => {
                self.phase = RecorderPhase::Stopping;
                RecorderCommand::Stop
            }
            RecorderPhase::Requesting | RecorderPhase::Stopping => RecorderCommand::Ignore,
        }
    }

    /// Microphone access denied or failed.
    pub fn denied(&mut self) {
        if self.phase == RecorderPhase::Requesting {
            self.phase = RecorderPhase::Idle;
        }
    }

    /// Accept chunks while recording and during the final flush.
    pub fn push_chunk(&mut self, chunk: C) {
        if matches!(self.phase, RecorderPhase::Recording | RecorderPhase::Stopping) {
            self.chunks.push(chunk);
        }
    }
}

impl<C, M: Microphone> VoiceRecorder<C, M> {
    /// Microphone access granted. A grant that arrives outside `Requesting`
    /// is released immediately and returns `false`.
    pub fn acquired(&mut self, mut microphone: M) -> bool {
        if self.phase != RecorderPhase::Requesting {
            microphone.release();
            return false;
        }
        self.chunks.clear();
        self.microphone = Some(microphone);
        self.phase = RecorderPhase::Recording;
        true
    }

    /// The recorder flushed its last chunk, either after a stop click or
    /// because capture ended on its own. Releases the microphone, returns to
    /// `Idle`, and hands out the session output. Returns `None` if no session
    /// was live.
    pub fn finish(&mut self) -> Option<Finished<C, M>> {
        let interrupted = match self.phase {
            RecorderPhase::Recording => true,
            RecorderPhase::Stopping => false,
            RecorderPhase::Idle | RecorderPhase::Requesting => return None,
        };
        self.phase = RecorderPhase::Idle;
        let mut microphone = self.microphone.take()?;
        microphone.release();
        Some(Finished { chunks: std::mem::take(&mut self.chunks), microphone, interrupted })
    }
}
