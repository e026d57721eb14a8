//! Level and progress stores.
//!
//! The engine never reads or writes storage itself; sessions consume
//! these traits. [`DirectoryLevels`] reads the shipped on-disk layout
//! (a `levels-index.json` next to per-level files) and persists progress
//! back to the index. [`MemoryLevels`] keeps everything in memory, for
//! embedded level packs and tests.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::LevelError;

use super::definition::LevelDefinition;
use super::index::{LevelIndex, LevelSummary};

/// Read access to a level collection.
pub trait LevelStore {
    /// Load the level index.
    fn load_index(&self) -> Result<LevelIndex, LevelError>;

    /// Load one level's definition.
    fn load_level(&self, id: u32) -> Result<LevelDefinition, LevelError>;
}

/// Write access to player progress.
pub trait ProgressStore {
    /// Record a completion (best-so-far semantics; unlocks the next
    /// level in index order).
    fn record_completion(&mut self, id: u32, moves: u32, stars: u8) -> Result<(), LevelError>;

    /// The level after `id` in index order, if any.
    fn next_level(&self, id: u32) -> Result<Option<LevelSummary>, LevelError>;
}

/// Levels stored as JSON files in a directory.
///
/// Layout matches the level converter's output:
///
/// ```text
/// levels/
///   levels-index.json
///   level-001.json
///   level-002.json
///   ...
/// ```
///
/// The index is read once at open; progress writes go back to
/// `levels-index.json`.
#[derive(Debug)]
pub struct DirectoryLevels {
    root: PathBuf,
    index: LevelIndex,
}

impl DirectoryLevels {
    const INDEX_FILE: &'static str = "levels-index.json";

    /// Open a level directory, reading its index.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, LevelError> {
        let root = root.into();
        let raw = fs::read_to_string(root.join(Self::INDEX_FILE))?;
        let index: LevelIndex = serde_json::from_str(&raw)?;
        debug!(
            "opened level directory {} ({} levels)",
            root.display(),
            index.levels.len()
        );
        Ok(Self { root, index })
    }

    /// The directory this store reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn save_index(&self) -> Result<(), LevelError> {
        let raw = serde_json::to_string_pretty(&self.index)?;
        fs::write(self.root.join(Self::INDEX_FILE), raw)?;
        Ok(())
    }
}

impl LevelStore for DirectoryLevels {
    fn load_index(&self) -> Result<LevelIndex, LevelError> {
        Ok(self.index.clone())
    }

    fn load_level(&self, id: u32) -> Result<LevelDefinition, LevelError> {
        let summary = self.index.get(id).ok_or(LevelError::UnknownLevel(id))?;
        let raw = fs::read_to_string(self.root.join(&summary.file))?;
        let level: LevelDefinition = serde_json::from_str(&raw)?;
        level.validate()?;
        Ok(level)
    }
}

impl ProgressStore for DirectoryLevels {
    fn record_completion(&mut self, id: u32, moves: u32, stars: u8) -> Result<(), LevelError> {
        self.index.record_completion(id, moves, stars)?;
        self.save_index()
    }

    fn next_level(&self, id: u32) -> Result<Option<LevelSummary>, LevelError> {
        Ok(self.index.next_after(id).cloned())
    }
}

/// An in-memory level collection.
#[derive(Debug, Default)]
pub struct MemoryLevels {
    index: LevelIndex,
    levels: FxHashMap<u32, LevelDefinition>,
}

impl MemoryLevels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level, appending a summary to the index. The first level
    /// added starts unlocked. Re-inserting an existing id replaces the
    /// stored level and refreshes its summary in place; the index never
    /// grows a second entry for the same id.
    pub fn insert(&mut self, level: LevelDefinition) {
        let id = level.level_id;
        if let Some(summary) = self.index.levels.iter_mut().find(|summary| summary.id == id) {
            summary.name = level.name.clone();
            summary.difficulty = level.difficulty;
        } else {
            self.index.levels.push(LevelSummary {
                id,
                file: String::new(),
                name: level.name.clone(),
                difficulty: level.difficulty,
                unlocked: self.index.levels.is_empty(),
                completed: false,
                stars: 0,
                best_moves: None,
            });
            self.index.total_levels = self.index.levels.len();
        }
        self.levels.insert(id, level);
    }
}

impl LevelStore for MemoryLevels {
    fn load_index(&self) -> Result<LevelIndex, LevelError> {
        Ok(self.index.clone())
    }

    fn load_level(&self, id: u32) -> Result<LevelDefinition, LevelError> {
        let level = self
            .levels
            .get(&id)
            .cloned()
            .ok_or(LevelError::UnknownLevel(id))?;
        level.validate()?;
        Ok(level)
    }
}

impl ProgressStore for MemoryLevels {
    fn record_completion(&mut self, id: u32, moves: u32, stars: u8) -> Result<(), LevelError> {
        self.index.record_completion(id, moves, stars)
    }

    fn next_level(&self, id: u32) -> Result<Option<LevelSummary>, LevelError> {
        Ok(self.index.next_after(id).cloned())
    }
}
