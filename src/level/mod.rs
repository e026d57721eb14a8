//! Level templates and the level/progress store boundary.
//!
//! A [`LevelDefinition`] is immutable template data loaded once per play
//! session. It is validated structurally before any board exists; a
//! fresh, independently-owned [`Board`](crate::core::Board) is cloned
//! from it each time a level starts or resets.

mod definition;
mod index;
mod store;

pub use definition::{Difficulty, LevelDefinition, TubeSpec};
pub use index::{LevelIndex, LevelSummary};
pub use store::{DirectoryLevels, LevelStore, MemoryLevels, ProgressStore};
