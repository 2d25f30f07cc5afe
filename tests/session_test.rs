//! Session-level behavior: seeding, replenishment and id uniqueness.

use std::collections::HashSet;

use tetris_stack::core::{PieceError, SimpleRng};
use tetris_stack::engine::{GameSession, Outcome};
use tetris_stack::types::{MenuAction, Variant, QUEUE_CAPACITY, STACK_CAPACITY};

#[test]
fn ids_are_unique_and_increasing_over_a_long_session() {
    let mut session = GameSession::new(2024, Variant::Full);
    let mut rng = SimpleRng::new(5);

    let mut generated: Vec<u64> = session.queue().iter().map(|p| p.id).collect();
    for _ in 0..500 {
        let action = MenuAction::ALL[rng.next_range(5) as usize];
        let report = session.apply(action);
        if let Some(piece) = report.replenished {
            generated.push(piece.id);
        }

        assert!(session.queue().len() <= QUEUE_CAPACITY);
        assert!(session.stack().len() <= STACK_CAPACITY);
    }

    assert!(generated.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(generated[0], 0);

    // Pieces currently held are all distinct.
    let held: Vec<u64> = session
        .queue()
        .iter()
        .chain(session.stack().as_slice().iter().copied())
        .map(|p| p.id)
        .collect();
    let unique: HashSet<u64> = held.iter().copied().collect();
    assert_eq!(unique.len(), held.len());
}

#[test]
fn queue_stays_full_under_play_and_reserve() {
    let mut session = GameSession::new(9, Variant::Full);
    for i in 0..40 {
        let action = if i % 3 == 0 {
            MenuAction::Reserve
        } else {
            MenuAction::Play
        };
        let report = session.apply(action);
        assert!(report.outcome.consumed_front());
        assert!(report.replenished.is_some());
        assert!(session.queue().is_full());
    }
}

#[test]
fn non_consuming_actions_never_generate() {
    let mut session = GameSession::new(9, Variant::Full);
    for _ in 0..3 {
        session.apply(MenuAction::Reserve);
    }
    let next_id = session.snapshot().next_id;

    for action in [
        MenuAction::SwapFrontTop,
        MenuAction::SwapBlock,
        MenuAction::UseReserved,
        MenuAction::UseReserved,
    ] {
        let report = session.apply(action);
        assert!(report.outcome.is_success(), "{:?}", report.outcome);
        assert_eq!(report.replenished, None);
    }
    assert_eq!(session.snapshot().next_id, next_id);
    assert_eq!(session.stack().len(), 1);
}

#[test]
fn reserve_into_full_stack_loses_the_piece() {
    let mut session = GameSession::new(3, Variant::Full);
    for _ in 0..STACK_CAPACITY {
        session.apply(MenuAction::Reserve);
    }
    let front = session.queue().peek_front().unwrap();

    let report = session.apply(MenuAction::Reserve);
    assert_eq!(
        report.outcome,
        Outcome::Discarded {
            piece: front,
            cause: PieceError::StackFull
        }
    );
    let snap = session.snapshot();
    assert!(!snap.queue.contains(&front));
    assert!(!snap.stack.contains(&front));
    assert_eq!(snap.queue.len(), QUEUE_CAPACITY);
}

#[test]
fn same_seed_same_session() {
    let mut a = GameSession::new(31337, Variant::Full);
    let mut b = GameSession::new(31337, Variant::Full);
    for action in [MenuAction::Play, MenuAction::Reserve, MenuAction::SwapFrontTop] {
        assert_eq!(a.apply(action), b.apply(action));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn basic_variant_only_plays() {
    let mut session = GameSession::new(1, Variant::Basic);
    let before = session.snapshot();
    for action in [
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapFrontTop,
        MenuAction::SwapBlock,
    ] {
        let report = session.apply(action);
        assert!(matches!(report.outcome, Outcome::Unavailable { .. }));
    }
    let after = session.snapshot();
    assert_eq!(before.queue, after.queue);
    assert_eq!(before.next_id, after.next_id);

    assert!(matches!(
        session.apply(MenuAction::Play).outcome,
        Outcome::Played(_)
    ));
}
