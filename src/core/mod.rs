//! Core board types: identifiers, colors, tubes, and errors.

mod board;
mod color;
mod error;
mod tube;

pub use board::Board;
pub use color::{ColorId, Palette};
pub use error::{LevelError, MoveError};
pub use tube::{Tube, TubeId};
