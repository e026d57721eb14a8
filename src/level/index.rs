//! The level index: per-level summaries and player progress.
//!
//! Mirrors the shipped `levels-index.json`: a version string, the total
//! level count, and one summary per level carrying both static metadata
//! (file name, difficulty) and progress (unlocked, completed, stars,
//! best move count).

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::LevelError;

use super::definition::Difficulty;

/// One level's entry in the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    pub id: u32,
    /// Level file name, relative to the index.
    pub file: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub completed: bool,
    /// Best stars earned so far (0 if never completed).
    #[serde(default)]
    pub stars: u8,
    /// Fewest moves in any completion.
    #[serde(default)]
    pub best_moves: Option<u32>,
}

/// The full level index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelIndex {
    #[serde(default)]
    pub version: String,
    pub total_levels: usize,
    pub levels: Vec<LevelSummary>,
    /// Fields the engine does not interpret (the per-difficulty category
    /// map, `puzzleType`, `description`, ...). Carried through so
    /// progress writes round-trip the shipped index format instead of
    /// stripping them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LevelIndex {
    /// Look up a level's summary.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&LevelSummary> {
        self.levels.iter().find(|summary| summary.id == id)
    }

    /// The level after `id` in index order, if any.
    #[must_use]
    pub fn next_after(&self, id: u32) -> Option<&LevelSummary> {
        let pos = self.levels.iter().position(|summary| summary.id == id)?;
        self.levels.get(pos + 1)
    }

    /// Record a completion: marks the level completed, keeps the best
    /// (lowest) move count and highest star count seen so far, and
    /// unlocks the next level in index order.
    pub fn record_completion(&mut self, id: u32, moves: u32, stars: u8) -> Result<(), LevelError> {
        let pos = self
            .levels
            .iter()
            .position(|summary| summary.id == id)
            .ok_or(LevelError::UnknownLevel(id))?;

        let summary = &mut self.levels[pos];
        summary.completed = true;
        summary.stars = summary.stars.max(stars);
        summary.best_moves = Some(match summary.best_moves {
            Some(best) => best.min(moves),
            None => moves,
        });
        info!(
            "level {id} completed in {moves} moves ({stars} stars, best {:?})",
            summary.best_moves
        );

        if let Some(next) = self.levels.get_mut(pos + 1) {
            next.unlocked = true;
        }
        Ok(())
    }
}
