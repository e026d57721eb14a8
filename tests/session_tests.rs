//! End-to-end session tests: load levels from a store, play them through
//! the tap-selection protocol, record progress, and advance.

use tubesort::level::{LevelDefinition, TubeSpec};
use tubesort::{
    LevelStore, MemoryLevels, MoveError, MoveOutcome, PlaySession, ProgressStore, StarThresholds,
    TapOutcome, TapSelector, TubeId,
};

/// A level solvable in one bulk pour: 0 -> 1.
fn one_move_level(id: u32) -> LevelDefinition {
    LevelDefinition {
        level_id: id,
        name: format!("Level {id}"),
        difficulty: None,
        tubes: vec![
            TubeSpec {
                id: TubeId::new(0),
                balls: vec!["blue".into(), "blue".into(), "blue".into(), "blue".into()],
                capacity: 4,
            },
            TubeSpec {
                id: TubeId::new(1),
                balls: vec![],
                capacity: 2,
            },
            TubeSpec {
                id: TubeId::new(2),
                balls: vec!["blue".into(), "blue".into()],
                capacity: 2,
            },
        ],
        colors: vec!["blue".into()],
        min_moves: 1,
        stars: StarThresholds::new(4, 2, 1),
        desired_level: 2,
        solution_steps: vec![(TubeId::new(0), TubeId::new(1))],
        original_file: None,
        puzzle_type: None,
    }
}

fn store_with_two_levels() -> MemoryLevels {
    let mut store = MemoryLevels::new();
    store.insert(one_move_level(1));
    store.insert(one_move_level(2));
    store
}

/// Full loop: load, solve via taps, record, advance, solve again.
#[test]
fn test_play_through_two_levels() {
    let mut store = store_with_two_levels();

    let mut current = 1;
    loop {
        let level = store.load_level(current).unwrap();
        let mut session = PlaySession::new(&level).unwrap();
        let mut selector = TapSelector::new();

        // Follow the hints through the tap protocol.
        let completion = loop {
            let (from, to) = session.hint().expect("level ships solution steps");
            assert_eq!(selector.tap(session.board(), from), TapOutcome::Selected(from));
            let TapOutcome::Move { from, to } = selector.tap(session.board(), to) else {
                panic!("second tap should emit the move");
            };
            match session.apply_move(from, to).unwrap() {
                MoveOutcome::Poured(_) => continue,
                MoveOutcome::Solved { completion, .. } => break completion,
            }
        };

        assert_eq!(completion.move_count, 1);
        assert_eq!(completion.stars_earned, 3);
        store
            .record_completion(current, completion.move_count, completion.stars_earned)
            .unwrap();

        match store.next_level(current).unwrap() {
            Some(next) => {
                assert!(next.unlocked);
                current = next.id;
            }
            None => break,
        }
    }

    let index = store.load_index().unwrap();
    assert!(index.get(1).unwrap().completed);
    assert!(index.get(2).unwrap().completed);
    assert_eq!(index.get(1).unwrap().best_moves, Some(1));
}

/// Solved sessions reject everything until reset.
#[test]
fn test_solved_session_is_terminal_until_reset() {
    let level = one_move_level(1);
    let mut session = PlaySession::new(&level).unwrap();

    session.apply_move(TubeId::new(0), TubeId::new(1)).unwrap();
    assert!(session.is_solved());

    for _ in 0..3 {
        assert_eq!(
            session.apply_move(TubeId::new(2), TubeId::new(0)),
            Err(MoveError::AlreadySolved)
        );
    }
    assert_eq!(session.move_count(), 1);

    session.reset().unwrap();
    assert!(!session.is_solved());
    assert_eq!(session.move_count(), 0);

    // Playable again after reset.
    let outcome = session.apply_move(TubeId::new(0), TubeId::new(1)).unwrap();
    assert!(matches!(outcome, MoveOutcome::Solved { .. }));
}

/// Cancelling a selection never reaches the engine.
#[test]
fn test_cancel_selection_leaves_board_untouched() {
    let level = one_move_level(1);
    let session = PlaySession::new(&level).unwrap();
    let mut selector = TapSelector::new();

    selector.tap(session.board(), TubeId::new(0));
    assert_eq!(
        selector.tap(session.board(), TubeId::new(0)),
        TapOutcome::Cancelled
    );
    assert_eq!(session.move_count(), 0);
}

/// Hints run out once the solution steps are exhausted.
#[test]
fn test_hints_exhaust() {
    let level = one_move_level(1);
    let mut session = PlaySession::new(&level).unwrap();

    assert_eq!(session.hint(), Some((TubeId::new(0), TubeId::new(1))));
    session.apply_move(TubeId::new(0), TubeId::new(1)).unwrap();
    assert_eq!(session.hint(), None);
}

/// A structurally invalid level never produces a session.
#[test]
fn test_invalid_level_refused_up_front() {
    let mut bad = one_move_level(1);
    bad.tubes[1].balls.push("red".into()); // not in the palette

    assert!(PlaySession::new(&bad).is_err());
}
