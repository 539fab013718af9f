//! Error types.
//!
//! Every failure the engine can report is a typed value. Nothing here is
//! fatal: a rejected submission leaves all state untouched.

use thiserror::Error;

/// Reasons a combination submission is rejected.
///
/// Checks run in declaration order; the first failing check wins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No game was started for this player.
    #[error("no active game, start one first")]
    NoActiveGame,

    /// The submission does not have the required number of symbols.
    #[error("a combination needs exactly {expected} symbols, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The symbol is not allowed in this game.
    #[error("symbol '{0}' is not allowed in this game")]
    UnknownSymbol(String),

    /// The symbol appears more than once in the submission.
    #[error("symbol '{0}' is used more than once")]
    DuplicateSubmission(String),

    /// The symbol was consumed by an earlier combination of this game.
    #[error("symbol '{0}' was already used in this game")]
    AlreadyUsed(String),
}

/// Invalid action registrations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("symbol '{0}' is already registered")]
    DuplicateSymbol(String),

    #[error("action symbols must not be empty")]
    EmptySymbol,

    #[error("symbol '{0}' divides by zero")]
    ZeroDivisor(String),

    #[error("symbol '{symbol}' appends {digit}, which is not a single decimal digit")]
    InvalidDigit { symbol: String, digit: i64 },

    #[error("symbol '{symbol}' has an empty random range {low}..={high}")]
    InvalidRange { symbol: String, low: i64, high: i64 },
}

/// Engine configuration that cannot work with the given catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("combination length must be at least 1")]
    ZeroCombinationLength,

    #[error("offering {offered} symbols cannot fill a combination of {combination}")]
    OfferTooSmall { offered: usize, combination: usize },

    #[error("cannot offer {offered} symbols from a catalog of {catalog}")]
    OfferTooLarge { offered: usize, catalog: usize },
}

/// Failure to build a [`GameEngine`](crate::engine::GameEngine).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
