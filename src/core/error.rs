//! Error types.
//!
//! Two taxonomies, deliberately separate:
//!
//! - [`MoveError`]: rejected pours. Local and recoverable; the board is
//!   untouched and the player may immediately retry.
//! - [`LevelError`]: structural problems with level data or the level
//!   store. Surfaced before any session starts; the engine refuses to
//!   build a board from invalid data rather than fail during play.

use thiserror::Error;

use super::tube::TubeId;

/// A rejected move. No board mutation occurs on any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The source tube has no balls to pour.
    #[error("source {0} is empty")]
    EmptySource(TubeId),

    /// The destination tube is at capacity.
    #[error("destination {0} is full")]
    DestinationFull(TubeId),

    /// A referenced tube id does not exist on this board.
    ///
    /// Tube ids are validated by the level loader, so this signals a
    /// caller/integration bug (UI desync), not a normal rejection.
    #[error("{0} does not exist on this board")]
    UnknownTube(TubeId),

    /// Source and destination are the same tube. A conforming selection
    /// layer never produces this pair; the engine still guards it so the
    /// board invariants hold for any caller.
    #[error("source and destination are both {0}")]
    SameTube(TubeId),

    /// The session is already solved; the board is terminal until it is
    /// replaced by a reset or the next level.
    #[error("the puzzle is already solved")]
    AlreadySolved,
}

/// Invalid level data or a level-store failure.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no tubes")]
    NoTubes,

    #[error("{id} has zero capacity")]
    ZeroCapacity { id: TubeId },

    #[error("duplicate tube id {0}")]
    DuplicateTubeId(TubeId),

    #[error("{id} holds {count} balls but its capacity is {capacity}")]
    Overfilled {
        id: TubeId,
        count: usize,
        capacity: usize,
    },

    #[error("ball color {color:?} in {id} is not in the declared palette")]
    UnknownColor { id: TubeId, color: String },

    #[error("target fill {target} is unreachable (largest tube capacity is {max_capacity})")]
    TargetFillOutOfRange { target: usize, max_capacity: usize },

    #[error("level declares {count} distinct colors; at most 256 are supported")]
    PaletteTooLarge { count: usize },

    #[error("level {0} is not in the index")]
    UnknownLevel(u32),

    #[error("level store I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("level file parse: {0}")]
    Json(#[from] serde_json::Error),
}
