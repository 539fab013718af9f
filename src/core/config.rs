//! Engine configuration.
//!
//! The defaults reproduce the reference game: start from 1, offer 15
//! symbols, submit 8, accept anything in the catalog.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Which symbols a submission may draw from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolScope {
    /// Any symbol in the catalog, offered or not.
    #[default]
    Catalog,
    /// Only the symbols offered when the game started.
    Offered,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Value every new game starts from.
    pub starting_value: i64,

    /// Number of symbols in one combination.
    pub combination_length: usize,

    /// Number of symbols offered per game.
    pub offered_count: usize,

    /// Membership rule for submitted symbols.
    pub symbol_scope: SymbolScope,

    /// Entries returned by `GameEngine::top_records`.
    pub leaderboard_size: usize,

    /// Seed for the shared RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_value: 1,
            combination_length: 8,
            offered_count: 15,
            symbol_scope: SymbolScope::Catalog,
            leaderboard_size: 10,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the value every game starts from.
    #[must_use]
    pub fn with_starting_value(mut self, value: i64) -> Self {
        self.starting_value = value;
        self
    }

    /// Set how many symbols a combination must have.
    #[must_use]
    pub fn with_combination_length(mut self, length: usize) -> Self {
        self.combination_length = length;
        self
    }

    /// Set how many symbols are offered per game.
    #[must_use]
    pub fn with_offered_count(mut self, count: usize) -> Self {
        self.offered_count = count;
        self
    }

    /// Set which symbols a submission may use.
    #[must_use]
    pub fn with_symbol_scope(mut self, scope: SymbolScope) -> Self {
        self.symbol_scope = scope;
        self
    }

    /// Set how many entries `top_records` returns.
    #[must_use]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Seed the engine RNG for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the config against a catalog of `catalog_len` actions.
    pub fn validate(&self, catalog_len: usize) -> Result<(), ConfigError> {
        if self.combination_length == 0 {
            return Err(ConfigError::ZeroCombinationLength);
        }
        if self.offered_count < self.combination_length {
            return Err(ConfigError::OfferTooSmall {
                offered: self.offered_count,
                combination: self.combination_length,
            });
        }
        if self.offered_count > catalog_len {
            return Err(ConfigError::OfferTooLarge {
                offered: self.offered_count,
                catalog: catalog_len,
            });
        }
        Ok(())
    }
}
