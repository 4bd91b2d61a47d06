use super::*;

/// Timers scheduled at `at_ms`, fired in deadline order by the test clock.
struct Clock {
    pending: Vec<(u64, TypingTimer)>,
}

impl Clock {
    fn run(mut self, debounce: &mut TypingDebounce) -> Vec<u64> {
        self.pending.sort_by_key(|(due, _)| *due);
        self.pending
            .into_iter()
            .filter_map(|(due, timer)| debounce.fire(timer).then_some(due))
            .collect()
    }
}

const WINDOW_MS: u64 = 2_000;

#[test]
fn burst_of_keystrokes_stops_once_after_last() {
    let mut debounce = TypingDebounce::default();
    let mut clock = Clock { pending: Vec::new() };
    for at in [0_u64, 300, 900, 1_500, 1_999] {
        clock.pending.push((at + WINDOW_MS, debounce.keystroke()));
    }
    assert_eq!(clock.run(&mut debounce), vec![1_999 + WINDOW_MS]);
}

#[test]
fn separate_bursts_each_stop() {
    let mut debounce = TypingDebounce::default();
    let first = debounce.keystroke();
    assert!(debounce.fire(first));
    let second = debounce.keystroke();
    assert!(debounce.fire(second));
}

#[test]
fn timer_fires_at_most_once() {
    let mut debounce = TypingDebounce::default();
    let timer = debounce.keystroke();
    assert!(debounce.fire(timer));
    assert!(!debounce.fire(timer));
    assert!(!debounce.cancel());
}

#[test]
fn cancel_suppresses_pending_timer() {
    let mut debounce = TypingDebounce::default();
    let timer = debounce.keystroke();
    assert!(debounce.cancel());
    assert!(!debounce.fire(timer));
    assert!(!debounce.cancel());
}
