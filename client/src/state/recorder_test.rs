use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Debug)]
struct FakeMic {
    releases: Rc<Cell<u32>>,
}

impl Microphone for FakeMic {
    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

fn mic() -> (FakeMic, Rc<Cell<u32>>) {
    let releases = Rc::new(Cell::new(0));
    (FakeMic { releases: Rc::clone(&releases) }, releases)
}

#[test]
fn start_stop_yields_all_chunks_and_releases_once() {
    let mut rec: VoiceRecorder<&str, FakeMic> = VoiceRecorder::new();
    let (m, releases) = mic();

    assert_eq!(rec.toggle(), RecorderCommand::Acquire);
    assert!(rec.acquired(m));
    assert_eq!(rec.phase(), RecorderPhase::Recording);
    rec.push_chunk("a");
    rec.push_chunk("b");

    assert_eq!(rec.toggle(), RecorderCommand::Stop);
    rec.push_chunk("c");
    let finished = rec.finish().expect("finished session");

    assert_eq!(finished.chunks, vec!["a", "b", "c"]);
    assert!(!finished.interrupted);
    assert_eq!(releases.get(), 1);
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(rec.finish().is_none());
}

#[test]
fn clicks_in_transit_are_ignored() {
    let mut rec: VoiceRecorder<u8, FakeMic> = VoiceRecorder::new();
    assert_eq!(rec.toggle(), RecorderCommand::Acquire);
    assert_eq!(rec.toggle(), RecorderCommand::Ignore);

    let (m, _) = mic();
    rec.acquired(m);
    assert_eq!(rec.toggle(), RecorderCommand::Stop);
    assert_eq!(rec.toggle(), RecorderCommand::Ignore);
}

#[test]
fn denial_returns_to_idle_without_chunks() {
    let mut rec: VoiceRecorder<u8, FakeMic> = VoiceRecorder::new();
    rec.toggle();
    rec.denied();
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    rec.push_chunk(1);
    assert_eq!(rec.toggle(), RecorderCommand::Acquire);
}

#[test]
fn late_grant_is_released() {
    let mut rec: VoiceRecorder<u8, FakeMic> = VoiceRecorder::new();
    let (m, releases) = mic();
    assert!(!rec.acquired(m));
    assert_eq!(releases.get(), 1);
    assert!(rec.microphone().is_none());
}

#[test]
fn sessions_do_not_share_chunks() {
    let mut rec: VoiceRecorder<u8, FakeMic> = VoiceRecorder::new();
    for round in 0..2_u8 {
        let (m, _) = mic();
        rec.toggle();
        rec.acquired(m);
        rec.push_chunk(round);
        rec.toggle();
        let finished = rec.finish().expect("finished");
        assert_eq!(finished.chunks, vec![round]);
    }
}

#[test]
fn capture_ending_on_its_own_releases_and_resets() {
    let mut rec: VoiceRecorder<&str, FakeMic> = VoiceRecorder::new();
    let (m, releases) = mic();
    rec.toggle();
    rec.acquired(m);
    rec.push_chunk("a");

    // No stop click: the track ended underneath the recorder.
    let finished = rec.finish().expect("interrupted session");
    assert!(finished.interrupted);
    assert_eq!(finished.chunks, vec!["a"]);
    assert_eq!(releases.get(), 1);
    assert_eq!(rec.phase(), RecorderPhase::Idle);

    // The next click starts a fresh session instead of stopping a dead one.
    assert_eq!(rec.toggle(), RecorderCommand::Acquire);
}

#[test]
fn finish_without_live_session_is_ignored() {
    let mut rec: VoiceRecorder<u8, FakeMic> = VoiceRecorder::new();
    assert!(rec.finish().is_none());
    rec.toggle();
    assert!(rec.finish().is_none());
    assert_eq!(rec.phase(), RecorderPhase::Requesting);
}
