//! Property tests: random pointer/timer interleavings.
//!
//! Run with: cargo test --test properties

mod common;

use common::{attach, ms};
use proptest::prelude::*;
use spotlight_tui::{previous_index, EnginePhase};

#[derive(Debug, Clone)]
enum Op {
    Enter(usize),
    Leave(usize),
    Pointer(Option<usize>),
    Advance(u64),
    Truncate(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..8).prop_map(Op::Enter),
        3 => (0usize..8).prop_map(Op::Leave),
        2 => proptest::option::of(0usize..8).prop_map(Op::Pointer),
        4 => (0u64..7000).prop_map(Op::Advance),
        1 => (0usize..6).prop_map(Op::Truncate),
    ]
}

proptest! {
    #[test]
    fn exactly_one_card_is_highlighted(
        cards in 1usize..7,
        ops in proptest::collection::vec(op(), 0..80),
    ) {
        let mut engine = attach(cards);

        for op in ops {
            let rotating = engine.phase() == EnginePhase::Rotating;
            let start = engine.current_index();
            let seen = engine.applier().history.len();

            match op {
                Op::Enter(i) => engine.on_enter(i),
                Op::Leave(i) => engine.on_leave(i),
                Op::Pointer(card) => engine.pointer_at(card),
                Op::Advance(n) => {
                    engine.advance(ms(n));

                    // Without pointer events in between, every new apply is a
                    // rotation tick moving one card to the left.
                    if rotating {
                        let len = engine.card_count();
                        let mut prev = start;
                        for &index in &engine.applier().history[seen..] {
                            prop_assert_eq!(index, previous_index(prev, len));
                            prev = index;
                        }
                    }
                }
                Op::Truncate(len) => engine.truncate_cards(len),
            }

            let row = &engine.applier().row;
            if engine.card_count() == 0 {
                prop_assert_eq!(engine.phase(), EnginePhase::Inert);
                prop_assert!(!engine.is_running());
            } else {
                prop_assert_eq!(row.active_count(), 1);
                prop_assert_eq!(row.active(), engine.active_index());
            }
            prop_assert!(!(engine.is_running() && engine.is_hovering()));
        }
    }

    #[test]
    fn detach_always_silences(
        cards in 0usize..6,
        ops in proptest::collection::vec(op(), 0..30),
        after in 0u64..20_000,
    ) {
        let mut engine = attach(cards);
        for op in ops {
            match op {
                Op::Enter(i) => engine.on_enter(i),
                Op::Leave(i) => engine.on_leave(i),
                Op::Pointer(card) => engine.pointer_at(card),
                Op::Advance(n) => {
                    engine.advance(ms(n));
                }
                Op::Truncate(len) => engine.truncate_cards(len),
            }
        }

        engine.detach();
        let applied = engine.applier().history.len();
        prop_assert_eq!(engine.advance(ms(after)), 0);
        prop_assert_eq!(engine.applier().history.len(), applied);
    }
}
