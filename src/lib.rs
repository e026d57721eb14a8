//! # tubesort
//!
//! A ball-sort puzzle engine. Tubes hold stacked colored balls; the player
//! pours balls from one tube into another until every tube holds exactly
//! the target number of balls.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: No rendering, no input handling, no ambient global
//!    state in the rule logic. The engine consumes level definitions and
//!    move requests and produces board snapshots and completion events.
//!
//! 2. **Validate Before Play**: A level definition is structurally
//!    validated before any board is built from it. A malformed level
//!    never produces a playable session.
//!
//! 3. **Session Ownership**: Each play session owns its board outright.
//!    Boards are cloned from the immutable level template on start and
//!    reset; mutation during play never touches the template.
//!
//! ## Modules
//!
//! - `core`: Tube and color identifiers, the palette, `Tube`, `Board`,
//!   error types
//! - `level`: Level definitions, the JSON level format, the level index,
//!   level/progress store traits and implementations
//! - `engine`: Move legality, the pour algorithm, win detection, star
//!   scoring
//! - `session`: The per-play state machine, hints, and the tap-selection
//!   protocol that mediates UI taps into move requests

pub mod core;
pub mod engine;
pub mod level;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, ColorId, LevelError, MoveError, Palette, Tube, TubeId};

pub use crate::engine::{apply_move, compute_stars, is_solved, Pour, PourPolicy, StarThresholds};

pub use crate::level::{
    Difficulty, DirectoryLevels, LevelDefinition, LevelIndex, LevelStore, LevelSummary,
    MemoryLevels, ProgressStore, TubeSpec,
};

pub use crate::session::{
    Completion, MoveOutcome, PlaySession, SessionPhase, TapOutcome, TapSelector,
};
