//! # emoji-math
//!
//! Action engine and session state machine for the emoji-math puzzle.
//!
//! A player starts from a seed value and submits combinations of symbols.
//! Each symbol transforms the current value and can be used once per game.
//! The goal is the largest final value; the best one per player is kept as
//! a record and ranked on a leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Closed action set**: every operation is an `ActionKind` variant with
//!    a single dispatch point.
//!
//! 2. **Validate, then mutate**: a rejected submission never changes state.
//!
//! 3. **Injectable randomness**: shuffles, random multipliers and offers
//!    are generic over `rand::Rng`.
//!
//! 4. **Per-player locking**: one player's calls are serialized; different
//!    players never wait on each other's sessions.
//!
//! ## Arithmetic
//!
//! Values are `i64` with wrapping overflow, everywhere. Very long chains of
//! multiplications wrap around rather than saturate or promote.
//!
//! ## Modules
//!
//! - `core`: player IDs, RNG, configuration, errors
//! - `actions`: action kinds and the catalog
//! - `session`: sessions, records, and the store
//! - `engine`: game lifecycle
//! - `leaderboard`: ranked records

pub mod core;
pub mod actions;
pub mod session;
pub mod engine;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, GameRng,
    EngineConfig, SymbolScope,
    CatalogError, ConfigError, EngineError, SubmitError,
};

pub use crate::actions::{Action, ActionKind, ActionCatalog, CatalogBuilder};

pub use crate::session::{Session, Record, RecordEntry, SessionStore};

pub use crate::engine::{GameEngine, GameStart, CombinationOutcome, TraceStep, Trace};

pub use crate::leaderboard::{Leaderboard, LeaderboardEntry};
