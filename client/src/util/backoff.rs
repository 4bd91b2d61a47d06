//! Bounded exponential backoff schedules.
//!
//! The channel client reconnects forever with a capped delay; HTTP calls retry
//! a few times and then surface the failure to the page.

#[cfg(test)]
#[path = "backoff_test.rs"]
mod backoff_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backoff {
    pub initial_ms: u32,
    pub max_ms: u32,
    /// Retries allowed after the first attempt. `None` retries forever.
    pub max_retries: Option<u32>,
}

impl Backoff {
    /// Real-time channel reconnect schedule.
    pub const RECONNECT: Self = Self { initial_ms: 1_000, max_ms: 10_000, max_retries: None };

    /// Question fetch and answer submission schedule.
    pub const REQUEST: Self = Self { initial_ms: 400, max_ms: 3_200, max_retries: Some(3) };

    /// Delay before retry number `retry` (zero-based).
    #[must_use]
    pub fn delay_ms(&self, retry: u32) -> u32 {
        let factor = 1_u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.initial_ms.saturating_mul(factor).min(self.max_ms)
    }

    /// Whether retry number `retry` (zero-based) may run.
    #[must_use]
    pub fn allows_retry(&self, retry: u32) -> bool {
        self.max_retries.is_none_or(|max| retry < max)
    }
}

/// Retry counter for a connection that is re-established forever.
///
/// The counter only resets once a connection is confirmed open; opening a
/// socket object alone proves nothing, so unreachable servers keep backing
/// off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconnect {
    schedule: Backoff,
    retry: u32,
}

impl Reconnect {
    #[must_use]
    pub fn new(schedule: Backoff) -> Self {
        Self { schedule, retry: 0 }
    }

    /// The connection reached the open state and joined.
    pub fn established(&mut self) {
        self.retry = 0;
    }

    /// Delay before the next attempt; advances the schedule.
    pub fn next_delay_ms(&mut self) -> u32 {
        let delay = self.schedule.delay_ms(self.retry);
        self.retry = self.retry.saturating_add(1);
        delay
    }
}
