//! Trailing-edge debounce for the "stop typing" signal.
//!
//! Every keystroke arms a new timer generation. When a timer fires it only
//! counts if it is still the newest generation, so a burst of keystrokes
//! yields exactly one `stop_typing` after the quiet period.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Handle for one armed debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimer(u64);

#[derive(Clone, Copy, Debug, Default)]
pub struct TypingDebounce {
    generation: u64,
    armed: bool,
}

impl TypingDebounce {
    /// Register a keystroke and arm a fresh timer, superseding the last one.
    pub fn keystroke(&mut self) -> TypingTimer {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TypingTimer(self.generation)
    }

    /// A timer elapsed. Returns `true` when `stop_typing` should be emitted.
    pub fn fire(&mut self, timer: TypingTimer) -> bool {
        if !self.armed || timer.0 != self.generation {
            return false;
        }
        self.armed = false;
        true
    }

    /// Disarm the pending timer because the message was sent. Returns `true`
    /// if a timer was pending, in which case `stop_typing` is due now.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }
}
