//! Ranking records.
//!
//! Order: record value descending, then record creation order ascending
//! (the player who first set a record earlier wins a tie).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::session::{RecordEntry, SessionStore};

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub player: PlayerId,
    pub record: i64,
}

/// Sort `records` and keep the best `limit`.
#[must_use]
pub fn rank(mut records: Vec<RecordEntry>, limit: usize) -> Vec<LeaderboardEntry> {
    records.sort_by(|a, b| {
        b.record
            .value
            .cmp(&a.record.value)
            .then(a.record.sequence.cmp(&b.record.sequence))
    });

    records
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| LeaderboardEntry {
            rank: i + 1,
            player: entry.player,
            record: entry.record.value,
        })
        .collect()
}

/// Ranked view over the records in a [`SessionStore`].
///
/// Holds no state of its own; every call reads a fresh snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Leaderboard<'a> {
    store: &'a SessionStore,
}

impl<'a> Leaderboard<'a> {
    #[must_use]
    pub fn new(store: &'a SessionStore) -> Self {
        Self { store }
    }

    /// Up to `n` entries, best first. Empty when nobody has a record.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        if n == 0 {
            return Vec::new();
        }
        rank(self.store.records(), n)
    }

    /// 1-based position of `player` across all records.
    #[must_use]
    pub fn rank_of(&self, player: &str) -> Option<usize> {
        let records = self.store.records();
        let total = records.len();
        rank(records, total)
            .into_iter()
            .find(|entry| entry.player.as_str() == player)
            .map(|entry| entry.rank)
    }
}
