//! The play session: one level, one board, one owner.
//!
//! ## State machine
//!
//! `NotStarted -> InProgress -> Solved`. The first move request (accepted
//! or rejected) moves the session into `InProgress`; the move after which
//! the win check passes moves it into `Solved`. `Solved` is terminal:
//! every further move request is rejected until [`reset`] rebuilds the
//! board or the caller constructs a new session for the next level.
//!
//! [`reset`]: PlaySession::reset

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Board, LevelError, MoveError, TubeId};
use crate::engine::{apply_move, compute_stars, is_solved, Pour, PourPolicy, StarThresholds};
use crate::level::LevelDefinition;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Board built, no move attempted yet.
    NotStarted,
    /// At least one move attempted, win check not yet passed.
    InProgress,
    /// Win check passed. Terminal until the board is replaced.
    Solved,
}

/// The completion payload, produced exactly once per session, on the
/// transition into [`SessionPhase::Solved`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub stars_earned: u8,
    pub move_count: u32,
}

/// Result of a successful move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pour was applied; the puzzle continues.
    Poured(Pour),
    /// The pour was applied and solved the puzzle.
    Solved { pour: Pour, completion: Completion },
}

/// One level being played: owns the live board, applies moves, runs the
/// win check, and scores the completion.
///
/// ## Example
///
/// ```
/// use tubesort::level::LevelDefinition;
/// use tubesort::{MoveOutcome, PlaySession, TubeId};
///
/// let level: LevelDefinition = serde_json::from_str(r#"{
///     "levelId": 1,
///     "tubes": [
///         {"id": 0, "balls": ["blue", "blue", "blue", "blue"], "capacity": 4},
///         {"id": 1, "balls": [], "capacity": 2},
///         {"id": 2, "balls": ["blue", "blue"], "capacity": 2}
///     ],
///     "colors": ["blue"],
///     "minMoves": 1,
///     "stars": {"1": 4, "2": 2, "3": 1}
/// }"#).unwrap();
///
/// let mut session = PlaySession::new(&level).unwrap();
/// let outcome = session.apply_move(TubeId::new(0), TubeId::new(1)).unwrap();
///
/// match outcome {
///     MoveOutcome::Solved { completion, .. } => {
///         assert_eq!(completion.move_count, 1);
///         assert_eq!(completion.stars_earned, 3);
///     }
///     MoveOutcome::Poured(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PlaySession {
    level_id: u32,
    template: LevelDefinition,
    board: Board,
    policy: PourPolicy,
    thresholds: StarThresholds,
    phase: SessionPhase,
}

impl PlaySession {
    /// Start a session with the default (bulk) pour policy.
    pub fn new(level: &LevelDefinition) -> Result<Self, LevelError> {
        Self::with_policy(level, PourPolicy::default())
    }

    /// Start a session with an explicit pour policy.
    ///
    /// Validates the level and builds a fresh board; fails with
    /// [`LevelError`] rather than producing an unplayable session.
    pub fn with_policy(level: &LevelDefinition, policy: PourPolicy) -> Result<Self, LevelError> {
        let board = level.build_board()?;
        debug!(
            "session started: level {} ({} tubes, target fill {}, {policy:?})",
            level.level_id,
            board.tube_count(),
            board.target_fill()
        );
        Ok(Self {
            level_id: level.level_id,
            template: level.clone(),
            board,
            policy,
            thresholds: level.stars,
            phase: SessionPhase::NotStarted,
        })
    }

    /// Attempt a pour.
    ///
    /// Once solved, every request is rejected with
    /// [`MoveError::AlreadySolved`] and nothing mutates. Otherwise the
    /// engine's preconditions apply; on success the win check runs and
    /// the transition into `Solved` carries the scored [`Completion`].
    pub fn apply_move(&mut self, from: TubeId, to: TubeId) -> Result<MoveOutcome, MoveError> {
        if self.phase == SessionPhase::Solved {
            return Err(MoveError::AlreadySolved);
        }
        self.phase = SessionPhase::InProgress;

        let pour = apply_move(&mut self.board, from, to, self.policy)?;

        if is_solved(&self.board) {
            self.phase = SessionPhase::Solved;
            let completion = Completion {
                stars_earned: compute_stars(self.board.move_count(), &self.thresholds),
                move_count: self.board.move_count(),
            };
            info!(
                "level {} solved in {} moves ({} stars)",
                self.level_id, completion.move_count, completion.stars_earned
            );
            return Ok(MoveOutcome::Solved { pour, completion });
        }
        Ok(MoveOutcome::Poured(pour))
    }

    /// The next hint: `solution_steps` indexed by the current move
    /// count. `None` once the index runs past the supplied steps, or if
    /// the level shipped without steps.
    #[must_use]
    pub fn hint(&self) -> Option<(TubeId, TubeId)> {
        self.template
            .solution_steps
            .get(self.board.move_count() as usize)
            .copied()
    }

    /// Discard the board and rebuild it from the template.
    pub fn reset(&mut self) -> Result<(), LevelError> {
        self.board = self.template.build_board()?;
        self.phase = SessionPhase::NotStarted;
        debug!("session reset: level {}", self.level_id);
        Ok(())
    }

    /// The live board (the renderer's snapshot input).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.board.move_count()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == SessionPhase::Solved
    }

    #[must_use]
    pub fn policy(&self) -> PourPolicy {
        self.policy
    }
}
