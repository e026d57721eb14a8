//! Win detection.

use crate::core::Board;

/// Count-based win rule: the board is solved iff every tube holds
/// exactly `target_fill` balls.
///
/// Deterministic and independent of move history; callers may invoke it
/// any number of times without side effects. Runs after every successful
/// pour (see [`PlaySession`](crate::session::PlaySession)), but is safe
/// to call at any point.
#[must_use]
pub fn is_solved(board: &Board) -> bool {
    board
        .tubes()
        .iter()
        .all(|tube| tube.len() == board.target_fill())
}
