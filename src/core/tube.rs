//! Tubes: capacity-bounded stacks of balls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::ColorId;

/// Stable tube identifier, unique within a level.
///
/// Carried in level data; not an index into the board's tube list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TubeId(pub u32);

impl TubeId {
    /// Create a new tube ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TubeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tube({})", self.0)
    }
}

/// A capacity-bounded stack of balls.
///
/// Balls are pushed and popped only at the top (the end of the sequence).
/// Invariant: `len() <= capacity()` at all times. The pour algorithm and
/// level validation enforce it; the mutators are crate-private so callers
/// outside the engine cannot break it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tube {
    id: TubeId,
    balls: SmallVec<[ColorId; 8]>,
    capacity: usize,
}

impl Tube {
    /// Create an empty tube.
    ///
    /// Panics if `capacity` is zero; zero-capacity tubes are rejected by
    /// level validation before any `Tube` exists.
    #[must_use]
    pub fn new(id: TubeId, capacity: usize) -> Self {
        assert!(capacity >= 1, "Tube capacity must be at least 1");
        Self {
            id,
            balls: SmallVec::new(),
            capacity,
        }
    }

    /// Create a tube pre-filled with balls, bottom first.
    ///
    /// Panics if the balls exceed `capacity` or `capacity` is zero; level
    /// validation rejects both cases before construction.
    #[must_use]
    pub fn with_balls<I>(id: TubeId, capacity: usize, balls: I) -> Self
    where
        I: IntoIterator<Item = ColorId>,
    {
        let mut tube = Self::new(id, capacity);
        for ball in balls {
            assert!(tube.balls.len() < capacity, "Tube overfilled at construction");
            tube.balls.push(ball);
        }
        tube
    }

    /// This tube's identifier.
    #[must_use]
    pub fn id(&self) -> TubeId {
        self.id
    }

    /// Maximum number of balls this tube can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The balls, bottom first. The last element is the top of the stack.
    #[must_use]
    pub fn balls(&self) -> &[ColorId] {
        &self.balls
    }

    /// Number of balls currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Check if the tube holds no balls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Check if the tube is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.balls.len() >= self.capacity
    }

    /// Remaining room.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - self.balls.len()
    }

    /// The top ball, if any.
    #[must_use]
    pub fn top(&self) -> Option<ColorId> {
        self.balls.last().copied()
    }

    /// Push a ball onto the top. Caller must have checked capacity.
    pub(crate) fn push(&mut self, ball: ColorId) {
        debug_assert!(!self.is_full(), "push into a full tube");
        self.balls.push(ball);
    }

    /// Pop the top ball.
    pub(crate) fn pop(&mut self) -> Option<ColorId> {
        self.balls.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(id: u8) -> ColorId {
        ColorId::new(id)
    }

    #[test]
    fn test_new_tube_is_empty() {
        let tube = Tube::new(TubeId::new(0), 4);

        assert!(tube.is_empty());
        assert!(!tube.is_full());
        assert_eq!(tube.len(), 0);
        assert_eq!(tube.free_space(), 4);
        assert_eq!(tube.top(), None);
    }

    #[test]
    fn test_with_balls_bottom_first() {
        let tube = Tube::with_balls(TubeId::new(1), 4, [color(0), color(1)]);

        assert_eq!(tube.balls(), &[color(0), color(1)]);
        assert_eq!(tube.top(), Some(color(1)));
        assert_eq!(tube.free_space(), 2);
    }

    #[test]
    fn test_push_pop_stack_discipline() {
        let mut tube = Tube::new(TubeId::new(0), 2);

        tube.push(color(0));
        tube.push(color(1));
        assert!(tube.is_full());

        assert_eq!(tube.pop(), Some(color(1)));
        assert_eq!(tube.pop(), Some(color(0)));
        assert_eq!(tube.pop(), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn test_zero_capacity_panics() {
        let _ = Tube::new(TubeId::new(0), 0);
    }

    #[test]
    #[should_panic(expected = "overfilled")]
    fn test_overfill_at_construction_panics() {
        let _ = Tube::with_balls(TubeId::new(0), 1, [color(0), color(1)]);
    }
}
