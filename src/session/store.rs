//! Session store: per-player slots behind per-player locks.
//!
//! Slots live in a `DashMap`, so looking up different players only touches
//! the shard holding them. Each slot is an `Arc<Mutex<PlayerSlot>>`: callers
//! clone the `Arc` out of the map, release the shard, then hold the slot
//! lock for as long as their read-validate-write sequence needs.
//!
//! Never touch the map while holding a slot lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use super::state::{PlayerSlot, RecordEntry, Session};
use crate::core::PlayerId;

/// Shared handle to one player's state.
pub(crate) type SlotHandle = Arc<Mutex<PlayerSlot>>;

/// All sessions and records for the engine's lifetime.
///
/// Read-only from outside the crate: sessions and records only change
/// through the engine.
///
/// ```compile_fail
/// use emoji_math::core::{EngineConfig, PlayerId};
/// use emoji_math::engine::GameEngine;
///
/// let engine = GameEngine::new(EngineConfig::default()).unwrap();
/// let slot = engine.store().slot(&PlayerId::new("u1"));
/// slot.lock().offer_record(i64::MAX, || 0);
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    slots: DashMap<PlayerId, SlotHandle>,
    record_sequence: AtomicU64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the player's slot, creating an empty one if needed.
    pub(crate) fn slot(&self, player: &PlayerId) -> SlotHandle {
        if let Some(slot) = self.slots.get(player) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(player.clone()).or_default().value())
    }

    /// Get the player's slot if the player was ever seen.
    #[must_use]
    pub(crate) fn existing_slot(&self, player: &str) -> Option<SlotHandle> {
        self.slots.get(player).map(|slot| Arc::clone(slot.value()))
    }

    /// Snapshot of the player's session.
    #[must_use]
    pub fn session(&self, player: &str) -> Option<Session> {
        let slot = self.existing_slot(player)?;
        let guard = slot.lock();
        guard.session().cloned()
    }

    /// The player's record value.
    #[must_use]
    pub fn record(&self, player: &str) -> Option<i64> {
        let slot = self.existing_slot(player)?;
        let guard = slot.lock();
        guard.record().map(|r| r.value)
    }

    /// Snapshot of every record, in no particular order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordEntry> {
        // Collect handles first so no shard lock is held while waiting on a slot.
        let handles: Vec<(PlayerId, SlotHandle)> = self
            .slots
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();

        handles
            .into_iter()
            .filter_map(|(player, slot)| {
                let record = slot.lock().record()?;
                Some(RecordEntry { player, record })
            })
            .collect()
    }

    /// Number of players ever seen.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.slots.len()
    }

    /// Next record creation number.
    pub(crate) fn next_record_sequence(&self) -> u64 {
        self.record_sequence.fetch_add(1, Ordering::Relaxed)
    }
}
