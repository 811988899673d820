// Host-side tests for the focus transition state machine, driven with
// synthetic rectangles and timestamps.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod focus {
    include!("../src/focus.rs");
}

use constants::CLOSE_GUARD_MS;
use focus::*;

struct FakeMeasurer {
    tiles: Vec<Option<Rect>>,
    viewport: Rect,
}

impl RectMeasurer for FakeMeasurer {
    fn tile_rect(&self, index: usize) -> Option<Rect> {
        self.tiles.get(index).copied().flatten()
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport
    }
}

fn measurer() -> FakeMeasurer {
    FakeMeasurer {
        tiles: vec![
            Some(Rect::new(120.0, 80.0, 60.0, 60.0)),
            Some(Rect::new(400.0, 300.0, 60.0, 60.0)),
            None,
        ],
        viewport: Rect::new(0.0, 0.0, 1000.0, 800.0),
    }
}

const TRANSITION_MS: f64 = 300.0;

fn open_machine(now: f64) -> (FocusMachine, OpenPlan) {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    let plan = machine
        .open(now, 0, &measurer(), None, None, 100.0)
        .unwrap()
        .unwrap();
    (machine, plan)
}

#[test]
fn opening_measures_source_and_centres_the_destination() {
    let (machine, plan) = open_machine(0.0);
    assert_eq!(machine.phase(), FocusPhase::Opening);
    assert_eq!(plan.source_rect, Rect::new(120.0, 80.0, 60.0, 60.0));
    // pad 100: available 800x600, natural frame 600x600 centred in 1000x800.
    assert_eq!(plan.dest_rect, Rect::new(200.0, 100.0, 600.0, 600.0));
}

#[test]
fn opening_never_completes_in_the_frame_it_started() {
    // The session must stay in Opening for the full duration even when the
    // first tick lands at the open timestamp itself.
    let (mut machine, _) = open_machine(500.0);
    assert_eq!(machine.tick(500.0), None);
    assert_eq!(machine.phase(), FocusPhase::Opening);
}

#[test]
fn opening_completes_after_the_transition_duration() {
    let (mut machine, _) = open_machine(0.0);
    assert_eq!(machine.tick(TRANSITION_MS - 1.0), None);
    assert_eq!(
        machine.tick(TRANSITION_MS),
        Some(FocusEvent::Opened { resize_to: None })
    );
    assert_eq!(machine.phase(), FocusPhase::Open);
    // Open is a resting state: no further automatic transitions.
    assert_eq!(machine.tick(TRANSITION_MS * 10.0), None);
}

#[test]
fn explicit_opened_size_chains_a_resize_substep() {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    machine
        .open(0.0, 0, &measurer(), Some(400.0), Some(300.0), 100.0)
        .unwrap()
        .unwrap();
    let event = machine.tick(TRANSITION_MS);
    assert_eq!(
        event,
        Some(FocusEvent::Opened {
            resize_to: Some(Rect::new(300.0, 250.0, 400.0, 300.0))
        })
    );
}

#[test]
fn opened_size_equal_to_the_natural_frame_skips_the_substep() {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    machine
        .open(0.0, 0, &measurer(), Some(600.0), Some(600.0), 100.0)
        .unwrap()
        .unwrap();
    assert_eq!(
        machine.tick(TRANSITION_MS),
        Some(FocusEvent::Opened { resize_to: None })
    );
}

#[test]
fn oversized_opened_dimensions_are_capped_to_the_padded_viewport() {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    machine
        .open(0.0, 0, &measurer(), Some(5000.0), None, 100.0)
        .unwrap()
        .unwrap();
    let Some(FocusEvent::Opened { resize_to: Some(r) }) = machine.tick(TRANSITION_MS) else {
        panic!("expected a resize substep");
    };
    assert_eq!(r.width, 800.0); // capped at available width
    assert_eq!(r.height, 600.0); // unspecified axis keeps the natural size
}

#[test]
fn reentrant_open_requests_are_noops() {
    let (mut machine, _) = open_machine(0.0);
    assert!(machine.open(10.0, 1, &measurer(), None, None, 100.0).unwrap().is_none());
    assert_eq!(machine.tile_index(), Some(0));

    machine.tick(TRANSITION_MS);
    assert!(machine.open(400.0, 1, &measurer(), None, None, 100.0).unwrap().is_none());
}

#[test]
fn unmeasurable_tile_aborts_to_idle() {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    let err = machine.open(0.0, 2, &measurer(), None, None, 100.0).unwrap_err();
    assert!(matches!(err, error::GalleryError::Measurement(_)));
    assert_eq!(machine.phase(), FocusPhase::Idle);
    // A later open still works.
    assert!(machine.open(5.0, 0, &measurer(), None, None, 100.0).unwrap().is_some());
}

#[test]
fn close_is_guarded_right_after_opening() {
    let (mut machine, _) = open_machine(0.0);
    assert_eq!(machine.request_close(CLOSE_GUARD_MS - 1.0), CloseOutcome::Ignored);
    assert_eq!(machine.phase(), FocusPhase::Opening);
    assert_eq!(machine.request_close(CLOSE_GUARD_MS), CloseOutcome::Accepted);
    assert_eq!(machine.phase(), FocusPhase::Closing);
}

#[test]
fn escape_after_the_guard_closes_an_open_session() {
    let (mut machine, _) = open_machine(0.0);
    machine.tick(TRANSITION_MS);
    assert_eq!(machine.phase(), FocusPhase::Open);
    assert_eq!(machine.request_close(TRANSITION_MS + 50.0), CloseOutcome::Accepted);
    assert_eq!(
        machine.tick(TRANSITION_MS + 50.0 + TRANSITION_MS),
        Some(FocusEvent::Closed { tile_index: 0 })
    );
    assert_eq!(machine.phase(), FocusPhase::Idle);
}

#[test]
fn close_requests_outside_a_session_are_ignored() {
    let mut machine = FocusMachine::new(TRANSITION_MS);
    assert_eq!(machine.request_close(0.0), CloseOutcome::Ignored);

    let (mut machine, _) = open_machine(0.0);
    machine.tick(TRANSITION_MS);
    machine.request_close(1000.0);
    // Already closing: a second request changes nothing.
    assert_eq!(machine.request_close(1001.0), CloseOutcome::Ignored);
}

#[test]
fn closing_returns_to_the_originally_recorded_source_rect() {
    let (mut machine, plan) = open_machine(0.0);
    machine.tick(TRANSITION_MS);
    machine.request_close(1000.0);
    // The rect recorded at open time survives the whole session.
    assert_eq!(machine.source_rect(), Some(plan.source_rect));
}

#[test]
fn abort_drops_the_session_without_events() {
    let (mut machine, _) = open_machine(0.0);
    machine.abort();
    assert_eq!(machine.phase(), FocusPhase::Idle);
    assert_eq!(machine.tick(10_000.0), None);
}
