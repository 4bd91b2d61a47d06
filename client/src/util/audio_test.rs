use super::*;

#[test]
fn cues_map_to_assets() {
    assert_eq!(Cue::Sent.src(), "/static/message_sent.mp3");
    assert_eq!(Cue::Received.src(), "/static/message_received.mp3");
    assert_eq!(Cue::Pop.src(), "/static/bubble_pop.mp3");
    assert!((Cue::Pop.volume() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn autoplay_retry_runs_once() {
    let mut retry = AutoplayRetry::default();
    assert!(!retry.take());
    assert!(retry.blocked());
    assert!(!retry.blocked());
    assert!(retry.take());
    assert!(!retry.take());
    assert!(!retry.blocked());
}
