//! Per-player game state.
//!
//! ## Session
//!
//! The in-progress game: current value, symbols consumed, symbols offered.
//! Uses `im` persistent collections so handing out snapshots is O(1).
//!
//! ## Record
//!
//! The best final value a player has reached, plus the order in which the
//! record was first created (leaderboard tie-breaking).

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One player's in-progress game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    current_value: i64,
    used_symbols: ImHashSet<String>,
    offered_symbols: Vector<String>,
    combinations_played: u32,
}

impl Session {
    /// Fresh session: nothing used yet.
    #[must_use]
    pub fn new(starting_value: i64, offered_symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            current_value: starting_value,
            used_symbols: ImHashSet::new(),
            offered_symbols: offered_symbols.into_iter().collect(),
            combinations_played: 0,
        }
    }

    /// Value the next combination starts from.
    #[must_use]
    pub fn current_value(&self) -> i64 {
        self.current_value
    }

    #[must_use]
    pub fn used_symbols(&self) -> &ImHashSet<String> {
        &self.used_symbols
    }

    #[must_use]
    pub fn offered_symbols(&self) -> &Vector<String> {
        &self.offered_symbols
    }

    /// Combinations completed since the game started.
    #[must_use]
    pub fn combinations_played(&self) -> u32 {
        self.combinations_played
    }

    #[must_use]
    pub fn is_used(&self, symbol: &str) -> bool {
        self.used_symbols.contains(symbol)
    }

    #[must_use]
    pub fn is_offered(&self, symbol: &str) -> bool {
        self.offered_symbols.iter().any(|s| s == symbol)
    }

    /// Offered symbols not consumed yet, in offered order.
    #[must_use]
    pub fn remaining_symbols(&self) -> Vec<String> {
        self.offered_symbols
            .iter()
            .filter(|s| !self.used_symbols.contains(s.as_str()))
            .cloned()
            .collect()
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_current_value(&mut self, value: i64) {
        self.current_value = value;
    }

    pub(crate) fn mark_used(&mut self, symbol: impl Into<String>) {
        self.used_symbols.insert(symbol.into());
    }

    pub(crate) fn finish_combination(&mut self) {
        self.combinations_played += 1;
    }
}

/// A player's best final value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Highest final value reached.
    pub value: i64,

    /// Creation order across all players (0 = first record ever set).
    pub sequence: u64,
}

/// A record together with its owner, as listed by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub player: PlayerId,
    pub record: Record,
}

/// Everything the store keeps for one player.
#[derive(Clone, Debug, Default)]
pub(crate) struct PlayerSlot {
    session: Option<Session>,
    record: Option<Record>,
}

impl PlayerSlot {
    #[must_use]
    pub(crate) fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Replace any in-progress session.
    pub(crate) fn reset_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    #[must_use]
    pub(crate) fn record(&self) -> Option<Record> {
        self.record
    }

    /// Store `value` if it beats the current record, or if there is none.
    ///
    /// `sequence` is only called when the record is created.
    /// Returns whether the record changed.
    pub(crate) fn offer_record(&mut self, value: i64, sequence: impl FnOnce() -> u64) -> bool {
        match &mut self.record {
            Some(record) if value > record.value => {
                record.value = value;
                true
            }
            Some(_) => false,
            None => {
                self.record = Some(Record {
                    value,
                    sequence: sequence(),
                });
                true
            }
        }
    }
}
