//! The board: an ordered collection of tubes plus play-state counters.

use rustc_hash::FxHashMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::tube::{Tube, TubeId};

/// The live puzzle state for one play session.
///
/// Holds the tubes (in display order), the move counter, and the target
/// fill. A board is cloned from a validated level template at session
/// start and reset; it is owned exclusively by that session.
///
/// Tube order is the display order and carries no other meaning; tubes
/// are addressed by [`TubeId`], not position.
#[derive(Clone, Debug)]
pub struct Board {
    tubes: Vec<Tube>,
    /// TubeId -> position in `tubes`. Ids are validated unique upstream.
    index: FxHashMap<TubeId, usize>,
    move_count: u32,
    target_fill: usize,
}

impl Board {
    /// Assemble a board from tubes with unique ids.
    ///
    /// Panics on a duplicate tube id; level validation rejects duplicates
    /// before any board is built.
    pub(crate) fn new(tubes: Vec<Tube>, target_fill: usize) -> Self {
        let mut index = FxHashMap::default();
        for (pos, tube) in tubes.iter().enumerate() {
            let prev = index.insert(tube.id(), pos);
            assert!(prev.is_none(), "Duplicate tube id {}", tube.id());
        }
        Self {
            tubes,
            index,
            move_count: 0,
            target_fill,
        }
    }

    /// The tubes in display order.
    #[must_use]
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Look up a tube by id.
    #[must_use]
    pub fn tube(&self, id: TubeId) -> Option<&Tube> {
        self.index.get(&id).map(|&pos| &self.tubes[pos])
    }

    /// Check if a tube id exists on this board.
    #[must_use]
    pub fn contains(&self, id: TubeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of tubes.
    #[must_use]
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    /// Completed pours so far. Increments by exactly 1 per successful
    /// pour, regardless of how many balls that pour transferred.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The exact ball count every tube must hold at a solved state.
    #[must_use]
    pub fn target_fill(&self) -> usize {
        self.target_fill
    }

    /// Total balls across all tubes. Invariant under pours.
    #[must_use]
    pub fn total_balls(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    /// Mutable references to two distinct tubes at once.
    ///
    /// Returns `None` if either id is unknown or the ids are equal.
    pub(crate) fn pair_mut(&mut self, a: TubeId, b: TubeId) -> Option<(&mut Tube, &mut Tube)> {
        let pa = *self.index.get(&a)?;
        let pb = *self.index.get(&b)?;
        if pa == pb {
            return None;
        }
        if pa < pb {
            let (left, right) = self.tubes.split_at_mut(pb);
            Some((&mut left[pa], &mut right[0]))
        } else {
            let (left, right) = self.tubes.split_at_mut(pa);
            Some((&mut right[0], &mut left[pb]))
        }
    }

    pub(crate) fn bump_move_count(&mut self) {
        self.move_count += 1;
    }
}

// Snapshot contract for renderers: tubes (in display order) plus the
// move counter. The id->position index is an internal detail.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Board", 3)?;
        state.serialize_field("tubes", &self.tubes)?;
        state.serialize_field("moveCount", &self.move_count)?;
        state.serialize_field("targetFill", &self.target_fill)?;
        state.end()
    }
}
