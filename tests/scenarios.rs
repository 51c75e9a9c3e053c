//! End-to-end highlight scenarios on a virtual clock.
//!
//! Run with: cargo test --test scenarios

mod common;

use common::{attach, ms, GRACE, PERIOD};
use spotlight_tui::{Clock, EnginePhase};

#[test]
fn four_cards_rotate_pause_and_resume() {
    let mut engine = attach(4);

    // Attach highlights the last card and starts from it
    assert_eq!(engine.active_index(), Some(3));
    assert_eq!(engine.current_index(), 3);

    engine.advance(PERIOD);
    assert_eq!(engine.active_index(), Some(2));

    engine.on_enter(0);
    assert_eq!(engine.active_index(), Some(0));
    assert!(!engine.is_running());

    engine.on_leave(0);
    engine.advance(GRACE);
    assert!(engine.is_running());
    assert_eq!(engine.current_index(), 0);

    engine.advance(PERIOD);
    assert_eq!(engine.active_index(), Some(3));
    assert_eq!(engine.applier().history, vec![3, 2, 0, 3]);
}

#[test]
fn empty_row_stays_inert() {
    let mut engine = attach(0);
    assert_eq!(engine.phase(), EnginePhase::Inert);

    engine.advance(PERIOD * 4);
    engine.on_enter(0);
    engine.on_leave(0);
    engine.advance(GRACE * 2);

    assert!(engine.applier().history.is_empty());
    assert!(!engine.is_running());
}

#[test]
fn reenter_within_grace_cancels_resume() {
    let mut engine = attach(4);

    engine.on_enter(0);
    engine.on_leave(0);
    engine.advance(ms(200));
    engine.on_enter(1);
    assert_eq!(engine.active_index(), Some(1));

    // Well past the first grace deadline: nothing resumed
    engine.advance(PERIOD * 2);
    assert!(!engine.is_running());
    assert_eq!(engine.active_index(), Some(1));
    assert_eq!(engine.phase(), EnginePhase::Interacted);

    // The next full leave + grace cycle does resume
    engine.on_leave(1);
    engine.advance(GRACE);
    assert_eq!(engine.phase(), EnginePhase::Rotating);
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn enter_takes_effect_before_next_tick() {
    let mut engine = attach(5);
    engine.advance(ms(2999));
    assert_eq!(engine.active_index(), Some(4));

    engine.on_enter(1);
    assert_eq!(engine.active_index(), Some(1));

    engine.advance(ms(1));
    assert_eq!(engine.active_index(), Some(1));
}

#[test]
fn resume_uses_last_hovered_card_not_rotation_position() {
    // Observed behavior kept on purpose: resumption restarts from the last
    // touched card even when the rotation had stopped somewhere else.
    let mut engine = attach(6);
    engine.advance(PERIOD * 2);
    assert_eq!(engine.current_index(), 3);

    engine.on_enter(5);
    engine.on_leave(5);
    engine.advance(GRACE);

    assert_eq!(engine.current_index(), 5);
    engine.advance(PERIOD);
    assert_eq!(engine.active_index(), Some(4));
}

#[test]
fn last_interacted_is_sticky_across_leaves() {
    let mut engine = attach(4);
    engine.on_enter(2);
    engine.on_leave(2);
    engine.advance(GRACE);
    assert_eq!(engine.last_interacted(), Some(2));

    // Spurious leave with no enter: still resumes from card 2
    engine.advance(PERIOD * 3);
    engine.on_leave(0);
    engine.advance(GRACE);
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn no_highlight_changes_while_stopped() {
    let mut engine = attach(4);
    engine.on_enter(3);
    let before = engine.applier().history.len();

    engine.advance(PERIOD * 20);
    assert_eq!(engine.applier().history.len(), before);
}

#[test]
fn tick_and_enter_on_the_same_turn_resolve_in_arrival_order() {
    // Enter arrives before the due tick is dispatched
    let mut first = attach(4);
    first.clock_mut().advance(PERIOD);
    first.on_enter(0);
    assert_eq!(first.pump(), 0);
    assert_eq!(first.active_index(), Some(0));

    // Tick dispatched first, then enter
    let mut second = attach(4);
    second.advance(PERIOD);
    second.on_enter(0);
    assert_eq!(second.active_index(), Some(0));

    assert_eq!(first.applier().row.styles(), second.applier().row.styles());
}

#[test]
fn rapid_cycling_keeps_one_debounce() {
    let mut engine = attach(3);
    for i in 0..10 {
        engine.on_enter(i % 3);
        engine.on_leave(i % 3);
        engine.advance(ms(100));
    }
    assert_eq!(engine.clock().next_deadline(), Some(ms(1400)));
    assert!(engine.has_pending_resume());

    engine.advance(GRACE);
    assert!(engine.is_running());
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn detach_silences_pending_timers() {
    let mut engine = attach(4);
    engine.on_enter(1);
    engine.on_leave(1);
    engine.detach();

    let before = engine.applier().history.len();
    engine.advance(PERIOD * 3);
    assert_eq!(engine.applier().history.len(), before);
    assert_eq!(engine.clock().next_deadline(), None);
}

#[test]
fn shrinking_mid_session_wraps_indices() {
    let mut engine = attach(6);
    engine.on_enter(5);
    engine.on_leave(5);

    engine.truncate_cards(4);
    assert_eq!(engine.last_interacted(), Some(1));
    assert_eq!(engine.active_index(), Some(1));
    assert_eq!(engine.applier().row.active_count(), 1);

    engine.advance(GRACE);
    assert_eq!(engine.current_index(), 1);
    engine.advance(PERIOD);
    assert_eq!(engine.active_index(), Some(0));
}
