//! The puzzle rules: move legality, the pour algorithm, win detection,
//! and star scoring.
//!
//! Everything here is a pure, immediately-returning computation over a
//! [`Board`](crate::core::Board) owned by the caller. No I/O, no clocks,
//! no ambient state.

mod pour;
mod scoring;
mod win;

pub use pour::{apply_move, Pour, PourPolicy};
pub use scoring::{compute_stars, StarThresholds};
pub use win::is_solved;
