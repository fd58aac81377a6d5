// Host-side tests for the round lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use constants::*;
use session::*;

fn run_to_end(s: &mut Session) -> Vec<TickOutcome> {
    let mut out = Vec::new();
    for _ in 0..s.duration_secs() + 3 {
        out.push(s.tick());
    }
    out
}

#[test]
fn new_session_is_inactive() {
    let s = Session::new(SESSION_SECONDS, 1);
    assert_eq!(s.state(), SessionState::default());
    assert!(!s.is_active());
}

#[test]
fn start_resets_count_and_clock() {
    let mut s = Session::new(5, 1);
    assert_eq!(s.start(), StartOutcome::Started);
    assert_eq!(
        s.state(),
        SessionState {
            active: true,
            tap_count: 0,
            seconds_remaining: 5
        }
    );
}

#[test]
fn start_while_active_changes_nothing() {
    let mut s = Session::new(5, 1);
    s.start();
    s.tap(1.0, 1.0);
    s.tap(2.0, 2.0);
    s.tick();
    let before = s.state();
    assert_eq!(s.start(), StartOutcome::AlreadyActive);
    assert_eq!(s.state(), before);
    assert_eq!(before.tap_count, 2);
    assert_eq!(before.seconds_remaining, 4);
}

#[test]
fn zero_duration_is_clamped_to_one_second() {
    let mut s = Session::new(0, 1);
    s.start();
    assert_eq!(s.tick(), TickOutcome::Ended { tap_count: 0 });
}

#[test]
fn countdown_ends_exactly_once_and_never_goes_negative() {
    let mut s = Session::new(5, 7);
    s.start();
    let outcomes = run_to_end(&mut s);
    let ended: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o, TickOutcome::Ended { .. }))
        .collect();
    assert_eq!(ended.len(), 1);
    assert_eq!(
        &outcomes[..5],
        &[
            TickOutcome::Running { seconds_remaining: 4 },
            TickOutcome::Running { seconds_remaining: 3 },
            TickOutcome::Running { seconds_remaining: 2 },
            TickOutcome::Running { seconds_remaining: 1 },
            TickOutcome::Ended { tap_count: 0 },
        ]
    );
    assert!(outcomes[5..].iter().all(|o| *o == TickOutcome::Idle));
    assert_eq!(s.state().seconds_remaining, 0);
}

#[test]
fn taps_only_count_while_active() {
    let mut s = Session::new(2, 3);
    assert!(s.tap(0.0, 0.0).is_none());
    s.start();
    for _ in 0..4 {
        assert!(s.tap(10.0, 10.0).is_some());
    }
    s.tick();
    assert!(s.tap(10.0, 10.0).is_some());
    assert_eq!(s.tick(), TickOutcome::Ended { tap_count: 5 });
    assert!(s.tap(10.0, 10.0).is_none());
    assert_eq!(s.state().tap_count, 5);
}

#[test]
fn state_is_frozen_after_the_round() {
    let mut s = Session::new(1, 3);
    s.start();
    s.tap(1.0, 1.0);
    s.tick();
    let frozen = s.state();
    s.tap(1.0, 1.0);
    s.tick();
    assert_eq!(s.state(), frozen);
    assert!(!frozen.active);
}

#[test]
fn next_start_begins_a_fresh_round() {
    let mut s = Session::new(1, 3);
    s.start();
    s.tap(1.0, 1.0);
    s.tick();
    assert_eq!(s.start(), StartOutcome::Started);
    assert_eq!(s.state().tap_count, 0);
    assert_eq!(s.state().seconds_remaining, 1);
}

#[test]
fn tap_reports_position_count_and_palette_color() {
    let mut s = Session::new(5, 99);
    s.start();
    for n in 1..=50u32 {
        let tap = s.tap(n as f64, 2.0 * n as f64).unwrap();
        assert_eq!(tap.tap_count, n);
        assert_eq!(tap.x, n as f64);
        assert_eq!(tap.y, 2.0 * n as f64);
        assert!(GLOW_PALETTE.contains(&tap.color));
    }
}

#[test]
fn same_seed_picks_same_colors() {
    let colors = |seed| {
        let mut s = Session::new(5, seed);
        s.start();
        (0..10).map(|_| s.tap(0.0, 0.0).unwrap().color).collect::<Vec<_>>()
    };
    assert_eq!(colors(42), colors(42));
}

#[test]
fn labels_carry_the_count() {
    assert_eq!(tap_count_label(3), "Taps: 3");
    assert_eq!(
        end_of_round_message(12),
        "Time's up! You tapped 12 times. Would you like to save your masterpiece?"
    );
}
