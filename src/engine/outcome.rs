//! Values the engine hands back to its caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// A freshly started game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStart {
    pub player: PlayerId,

    /// Value the first combination starts from.
    pub seed_value: i64,

    /// Symbols shown to the player, in draw order.
    pub offered_symbols: Vec<String>,
}

/// One applied symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub symbol: String,
    pub before: i64,
    pub after: i64,
}

impl std::fmt::Display for TraceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} \u{2192} {}", self.symbol, self.before, self.after)
    }
}

/// Steps of one combination, in submission order.
pub type Trace = SmallVec<[TraceStep; 8]>;

/// Result of a valid combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationOutcome {
    /// Session value before the first symbol was applied.
    pub starting_value: i64,

    pub trace: Trace,

    pub final_value: i64,

    /// Whether `final_value` became the player's record.
    pub is_new_record: bool,

    /// The player's record after this combination.
    pub record: i64,

    /// The record before this combination, if there was one.
    pub previous_record: Option<i64>,
}

impl CombinationOutcome {
    /// Values visited, starting value first.
    #[must_use]
    pub fn path(&self) -> Vec<i64> {
        std::iter::once(self.starting_value)
            .chain(self.trace.iter().map(|step| step.after))
            .collect()
    }
}
