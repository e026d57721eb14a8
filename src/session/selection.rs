//! Tap selection: resolving a sequence of tube taps into move requests.
//!
//! A pure input-mediation layer over the engine. It never calls the
//! engine itself; it only turns taps into `(from, to)` pairs:
//!
//! - first tap on a non-empty tube records it as the pending source
//!   (a first tap on an empty tube is ignored);
//! - a second tap on the same tube cancels the pending source;
//! - a second tap on a different tube emits the move pair and clears
//!   the pending source.

use crate::core::{Board, TubeId};

/// What one tap produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tube is now the pending source (highlight it).
    Selected(TubeId),
    /// The pending source was tapped again; selection cleared.
    Cancelled,
    /// A complete move request. The caller passes it to the session;
    /// the selection is already cleared.
    Move { from: TubeId, to: TubeId },
    /// Nothing to do (empty or unknown tube with no pending source).
    Ignored,
}

/// Tracks the pending source tube between taps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TapSelector {
    pending: Option<TubeId>,
}

impl TapSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one tap. The board is consulted only to refuse selecting an
    /// empty tube as a source.
    pub fn tap(&mut self, board: &Board, tube: TubeId) -> TapOutcome {
        match self.pending {
            None => {
                let selectable = board.tube(tube).is_some_and(|t| !t.is_empty());
                if selectable {
                    self.pending = Some(tube);
                    TapOutcome::Selected(tube)
                } else {
                    TapOutcome::Ignored
                }
            }
            Some(pending) if pending == tube => {
                self.pending = None;
                TapOutcome::Cancelled
            }
            Some(pending) => {
                self.pending = None;
                TapOutcome::Move {
                    from: pending,
                    to: tube,
                }
            }
        }
    }

    /// The currently highlighted source, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TubeId> {
        self.pending
    }

    /// Drop any pending selection (e.g. on reset or level change).
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
