//! The pour algorithm.
//!
//! A pour transfers balls from the top of one tube to the top of another.
//! There is no color-matching rule: any ball may be poured into any tube
//! with free capacity. This is a sorting-by-count puzzle; color
//! uniformity, where it happens, is a property of the level design.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Board, MoveError, TubeId};

/// How many balls one pour transfers.
///
/// Fixed per session at construction; the two policies produce different
/// move counts (and therefore different star outcomes) for the same
/// board, so they are never mixed within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PourPolicy {
    /// Transfer `min(source length, destination free space)` balls.
    ///
    /// The default: shipped level data's `minMoves` and star thresholds
    /// assume multi-ball transfers.
    #[default]
    Bulk,
    /// Transfer exactly one ball.
    Single,
}

/// A completed pour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pour {
    pub from: TubeId,
    pub to: TubeId,
    /// Balls transferred by this pour. Always >= 1.
    pub balls_moved: usize,
}

/// Attempt to pour from one tube into another.
///
/// Preconditions are checked in order and each rejection leaves the
/// board untouched:
///
/// 1. both ids must resolve to tubes on this board ([`MoveError::UnknownTube`]);
/// 2. the ids must differ ([`MoveError::SameTube`]);
/// 3. the source must hold at least one ball ([`MoveError::EmptySource`]);
/// 4. the destination must have free space ([`MoveError::DestinationFull`]).
///
/// On success the transfer is top-to-top (pop/push), so a bulk pour of
/// more than one ball reverses the relative order of the moved run.
/// `move_count` increments by exactly 1 regardless of how many balls
/// moved.
pub fn apply_move(
    board: &mut Board,
    from: TubeId,
    to: TubeId,
    policy: PourPolicy,
) -> Result<Pour, MoveError> {
    if !board.contains(from) {
        warn!("move references unknown source {from}");
        return Err(MoveError::UnknownTube(from));
    }
    if !board.contains(to) {
        warn!("move references unknown destination {to}");
        return Err(MoveError::UnknownTube(to));
    }
    let (source, destination) = board.pair_mut(from, to).ok_or(MoveError::SameTube(from))?;

    if source.is_empty() {
        return Err(MoveError::EmptySource(from));
    }
    if destination.is_full() {
        return Err(MoveError::DestinationFull(to));
    }

    let amount = match policy {
        PourPolicy::Bulk => source.len().min(destination.free_space()),
        PourPolicy::Single => 1,
    };
    for _ in 0..amount {
        if let Some(ball) = source.pop() {
            destination.push(ball);
        }
    }
    board.bump_move_count();
    debug!(
        "poured {amount} ball(s) {from} -> {to}, move {}",
        board.move_count()
    );

    Ok(Pour {
        from,
        to,
        balls_moved: amount,
    })
}
