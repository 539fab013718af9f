//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{EngineConfig, SymbolScope};
pub use error::{CatalogError, ConfigError, EngineError, SubmitError};
