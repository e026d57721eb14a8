//! Play sessions: the per-level state machine and input mediation.

mod play;
mod selection;

pub use play::{Completion, MoveOutcome, PlaySession, SessionPhase};
pub use selection::{TapOutcome, TapSelector};
