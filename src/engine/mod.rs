//! Game engine: session lifecycle, validation, and outcomes.

pub mod game;
pub mod outcome;

pub use game::GameEngine;
pub use outcome::{CombinationOutcome, GameStart, Trace, TraceStep};
