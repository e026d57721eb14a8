//! Level definitions: the immutable template a session plays from.
//!
//! The serde shape matches the shipped level files (`level-NNN.json`):
//! camelCase keys, star thresholds keyed `"1"`/`"2"`/`"3"`, an optional
//! `desiredLevel` defaulting to 2, and an optional `solutionSteps` list
//! of `[from, to]` tube-id pairs used only for hint display.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, LevelError, Palette, Tube, TubeId};
use crate::engine::StarThresholds;

/// Level difficulty bucket, as assigned by the level tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One tube's initial contents in a level template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TubeSpec {
    pub id: TubeId,
    /// Ball color tags, bottom first.
    pub balls: Vec<String>,
    pub capacity: usize,
}

fn default_desired_level() -> usize {
    2
}

/// Immutable level template data.
///
/// Never mutated after load. Sessions call [`build_board`] to obtain an
/// independently-owned, deep-copied board to play on.
///
/// [`build_board`]: LevelDefinition::build_board
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    pub level_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub tubes: Vec<TubeSpec>,
    /// The declared color palette. Every ball color must appear here.
    pub colors: Vec<String>,
    /// Optimal move count, supplied by the level tooling.
    pub min_moves: u32,
    pub stars: StarThresholds,
    /// The exact ball count every tube must hold at a solved state.
    #[serde(default = "default_desired_level")]
    pub desired_level: usize,
    /// Precomputed optimal moves, indexed by move count, for hints.
    #[serde(default)]
    pub solution_steps: Vec<(TubeId, TubeId)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_type: Option<String>,
}

impl LevelDefinition {
    /// The palette declared by this level.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_tags(self.colors.iter().cloned())
    }

    /// Structural validation, run before any board is built.
    ///
    /// Checks: at least one tube, every capacity >= 1, no duplicate tube
    /// ids, no tube filled past its capacity, at most 256 distinct
    /// colors, every ball color in the declared palette, and a target
    /// fill at least 1 and reachable by the largest tube.
    ///
    /// Solvability is not checked; that is the level generator's job.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.tubes.is_empty() {
            return Err(LevelError::NoTubes);
        }

        let distinct_colors: FxHashSet<&str> = self.colors.iter().map(String::as_str).collect();
        if distinct_colors.len() > 256 {
            return Err(LevelError::PaletteTooLarge {
                count: distinct_colors.len(),
            });
        }

        let palette = self.palette();
        let mut seen = FxHashSet::default();
        let mut max_capacity = 0;

        for spec in &self.tubes {
            if spec.capacity == 0 {
                return Err(LevelError::ZeroCapacity { id: spec.id });
            }
            if !seen.insert(spec.id) {
                return Err(LevelError::DuplicateTubeId(spec.id));
            }
            if spec.balls.len() > spec.capacity {
                return Err(LevelError::Overfilled {
                    id: spec.id,
                    count: spec.balls.len(),
                    capacity: spec.capacity,
                });
            }
            for color in &spec.balls {
                if palette.resolve(color).is_none() {
                    return Err(LevelError::UnknownColor {
                        id: spec.id,
                        color: color.clone(),
                    });
                }
            }
            max_capacity = max_capacity.max(spec.capacity);
        }

        if self.desired_level == 0 || self.desired_level > max_capacity {
            return Err(LevelError::TargetFillOutOfRange {
                target: self.desired_level,
                max_capacity,
            });
        }

        Ok(())
    }

    /// Validate, then build a fresh board from this template.
    ///
    /// Tube contents are deep-copied; mutating the returned board never
    /// affects the template, so repeated calls (start, reset) always
    /// yield the initial position.
    pub fn build_board(&self) -> Result<Board, LevelError> {
        self.validate()?;

        let palette = self.palette();
        let mut tubes = Vec::with_capacity(self.tubes.len());
        for spec in &self.tubes {
            let mut balls = Vec::with_capacity(spec.balls.len());
            for color in &spec.balls {
                let id = palette.resolve(color).ok_or_else(|| LevelError::UnknownColor {
                    id: spec.id,
                    color: color.clone(),
                })?;
                balls.push(id);
            }
            tubes.push(Tube::with_balls(spec.id, spec.capacity, balls));
        }

        Ok(Board::new(tubes, self.desired_level))
    }

    /// Total balls in the initial position.
    #[must_use]
    pub fn total_balls(&self) -> usize {
        self.tubes.iter().map(|spec| spec.balls.len()).sum()
    }
}
