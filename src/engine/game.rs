//! Game engine: session lifecycle over a catalog and a store.
//!
//! ## Lifecycle
//!
//! - `start_game`: any state → fresh session (value reset, nothing used,
//!   new offer). The player's record is kept.
//! - `submit_combination`: validate fully, then apply every symbol in
//!   order. A rejected submission changes nothing.
//!
//! There is no terminal state; a player may start over at any time.
//!
//! ## Concurrency
//!
//! Calls for one player are serialized by that player's slot lock, held
//! from validation through the record update. Different players only share
//! the RNG lock, which is held for single draws.

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::outcome::{CombinationOutcome, GameStart, Trace, TraceStep};
use crate::actions::{Action, ActionCatalog};
use crate::core::GameRng;
use crate::core::{EngineConfig, EngineError, PlayerId, SubmitError, SymbolScope};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::session::{Session, SessionStore};

/// The emoji-math game engine.
///
/// ## Example
///
/// ```
/// use emoji_math::actions::symbols::*;
/// use emoji_math::core::EngineConfig;
/// use emoji_math::engine::GameEngine;
///
/// let engine = GameEngine::new(EngineConfig::default().with_seed(7)).unwrap();
///
/// let start = engine.start_game("u1");
/// assert_eq!(start.seed_value, 1);
/// assert_eq!(start.offered_symbols.len(), 15);
///
/// let outcome = engine
///     .submit_combination(
///         "u1",
///         &[
///             ADD_FIVE, MULTIPLY_TWO, ADD_TEN, APPEND_LAST_DIGIT,
///             ADD_LAST_TWO_DIGITS, SUBTRACT_LAST_DIGIT, APPEND_ONE, MULTIPLY_HUNDRED,
///         ],
///     )
///     .unwrap();
/// assert_eq!(outcome.final_value, 240100);
/// assert!(outcome.is_new_record);
/// ```
#[derive(Debug)]
pub struct GameEngine<R = GameRng> {
    catalog: ActionCatalog,
    store: SessionStore,
    rng: Mutex<R>,
    config: EngineConfig,
}

impl GameEngine<GameRng> {
    /// Engine over the reference catalog.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS when unset.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_catalog(ActionCatalog::reference(), config)
    }

    /// Engine over a custom catalog.
    pub fn with_catalog(catalog: ActionCatalog, config: EngineConfig) -> Result<Self, EngineError> {
        let rng = GameRng::from_seed_option(config.seed);
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    /// Engine with an injected random source.
    pub fn with_rng(catalog: ActionCatalog, config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate(catalog.len())?;

        Ok(Self {
            catalog,
            store: SessionStore::new(),
            rng: Mutex::new(rng),
            config,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Start (or restart) a game for `player`.
    ///
    /// Any in-progress game for the player is discarded.
    pub fn start_game(&self, player: impl Into<PlayerId>) -> GameStart {
        let player = player.into();

        let all: Vec<&str> = self.catalog.symbols().collect();
        let offered: Vec<String> = {
            let mut rng = self.rng.lock();
            all.choose_multiple(&mut *rng, self.config.offered_count)
                .map(|s| (*s).to_owned())
                .collect()
        };

        let slot = self.store.slot(&player);
        slot.lock()
            .reset_session(Session::new(self.config.starting_value, offered.iter().cloned()));

        debug!(
            player = %player,
            offered = offered.len(),
            "Game started"
        );

        GameStart {
            player,
            seed_value: self.config.starting_value,
            offered_symbols: offered,
        }
    }

    /// Validate and apply a combination.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in this order: `NoActiveGame`,
    /// `WrongLength`, `UnknownSymbol`, `DuplicateSubmission`, `AlreadyUsed`.
    /// Nothing is mutated on error.
    ///
    /// Each check runs over the whole submission before the next one starts,
    /// so an unknown symbol anywhere wins over a used symbol earlier in the
    /// list. The reference bot checked symbol by symbol instead and would
    /// report the used symbol first in that case.
    pub fn submit_combination<S: AsRef<str>>(
        &self,
        player: &str,
        symbols: &[S],
    ) -> Result<CombinationOutcome, SubmitError> {
        let result = self.apply_combination(player, symbols);
        if let Err(err) = &result {
            debug!(player, error = %err, "Combination rejected");
        }
        result
    }

    fn apply_combination<S: AsRef<str>>(
        &self,
        player: &str,
        symbols: &[S],
    ) -> Result<CombinationOutcome, SubmitError> {
        let slot = self
            .store
            .existing_slot(player)
            .ok_or(SubmitError::NoActiveGame)?;
        let mut guard = slot.lock();

        let session = guard.session_mut().ok_or(SubmitError::NoActiveGame)?;
        let actions = self.validate(session, symbols)?;

        let starting_value = session.current_value();
        let mut value = starting_value;
        let mut trace = Trace::new();

        for action in actions {
            let before = value;
            value = action.apply(before, &mut *self.rng.lock());
            session.mark_used(action.symbol.as_str());
            trace.push(TraceStep {
                symbol: action.symbol.clone(),
                before,
                after: value,
            });
        }
        session.set_current_value(value);
        session.finish_combination();

        let previous_record = guard.record().map(|r| r.value);
        let is_new_record = guard.offer_record(value, || self.store.next_record_sequence());
        let record = guard.record().map_or(value, |r| r.value);

        if is_new_record {
            info!(player, record, ?previous_record, "New record");
        }

        Ok(CombinationOutcome {
            starting_value,
            trace,
            final_value: value,
            is_new_record,
            record,
            previous_record,
        })
    }

    /// Run every check against `session`, returning the resolved actions.
    fn validate<S: AsRef<str>>(
        &self,
        session: &Session,
        symbols: &[S],
    ) -> Result<SmallVec<[&Action; 8]>, SubmitError> {
        if symbols.len() != self.config.combination_length {
            return Err(SubmitError::WrongLength {
                expected: self.config.combination_length,
                actual: symbols.len(),
            });
        }
        let symbols: SmallVec<[&str; 8]> = symbols.iter().map(|s| s.as_ref()).collect();

        let mut actions = SmallVec::new();
        for &symbol in &symbols {
            let action = self
                .catalog
                .get(symbol)
                .filter(|_| self.in_scope(session, symbol))
                .ok_or_else(|| SubmitError::UnknownSymbol(symbol.to_string()))?;
            actions.push(action);
        }

        let mut seen = FxHashSet::default();
        if let Some(dup) = symbols.iter().find(|&&s| !seen.insert(s)) {
            return Err(SubmitError::DuplicateSubmission(dup.to_string()));
        }

        if let Some(used) = symbols.iter().find(|&&s| session.is_used(s)) {
            return Err(SubmitError::AlreadyUsed(used.to_string()));
        }

        Ok(actions)
    }

    fn in_scope(&self, session: &Session, symbol: &str) -> bool {
        match self.config.symbol_scope {
            SymbolScope::Catalog => true,
            SymbolScope::Offered => session.is_offered(symbol),
        }
    }

    /// `(symbol, description)` for every action, in catalog order.
    #[must_use]
    pub fn describe_catalog(&self) -> Vec<(String, String)> {
        self.catalog.describe()
    }

    /// Snapshot of the player's current session.
    #[must_use]
    pub fn session(&self, player: &str) -> Option<Session> {
        self.store.session(player)
    }

    /// The player's best final value.
    #[must_use]
    pub fn record(&self, player: &str) -> Option<i64> {
        self.store.record(player)
    }

    /// Up to `limit` best records.
    #[must_use]
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        Leaderboard::new(&self.store).top(limit)
    }

    /// Top `config.leaderboard_size` records.
    #[must_use]
    pub fn top_records(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard(self.config.leaderboard_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::symbols::*;
    use crate::actions::ActionKind;
    use crate::core::ConfigError;

    const SCENARIO: [&str; 8] = [
        ADD_FIVE,
        MULTIPLY_TWO,
        ADD_TEN,
        APPEND_LAST_DIGIT,
        ADD_LAST_TWO_DIGITS,
        SUBTRACT_LAST_DIGIT,
        APPEND_ONE,
        MULTIPLY_HUNDRED,
    ];

    fn engine() -> GameEngine {
        GameEngine::new(EngineConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_start_game() {
        let engine = engine();
        let start = engine.start_game("u1");

        assert_eq!(start.player, PlayerId::new("u1"));
        assert_eq!(start.seed_value, 1);
        assert_eq!(start.offered_symbols.len(), 15);
        assert!(start.offered_symbols.iter().all(|s| engine.catalog().contains(s)));

        let mut unique = start.offered_symbols.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_reference_scenario() {
        let engine = engine();
        engine.start_game("u1");

        let outcome = engine.submit_combination("u1", &SCENARIO).unwrap();

        assert_eq!(outcome.path(), vec![1, 6, 12, 22, 222, 244, 240, 2401, 240100]);
        assert_eq!(outcome.final_value, 240100);
        assert!(outcome.is_new_record);
        assert_eq!(outcome.record, 240100);
        assert_eq!(outcome.previous_record, None);
        assert_eq!(outcome.trace[0].symbol, ADD_FIVE);
    }

    #[test]
    fn test_session_updated_after_submit() {
        let engine = engine();
        engine.start_game("u1");
        engine.submit_combination("u1", &SCENARIO).unwrap();

        let session = engine.session("u1").unwrap();
        assert_eq!(session.current_value(), 240100);
        assert_eq!(session.used_symbols().len(), 8);
        assert_eq!(session.combinations_played(), 1);
        assert!(SCENARIO.iter().all(|s| session.is_used(s)));
    }

    #[test]
    fn test_no_active_game() {
        let engine = engine();
        assert_eq!(
            engine.submit_combination("u1", &SCENARIO),
            Err(SubmitError::NoActiveGame)
        );
    }

    #[test]
    fn test_wrong_length_checked_before_symbols() {
        let engine = engine();
        engine.start_game("u1");

        let result = engine.submit_combination("u1", &["junk"; 3]);
        assert_eq!(result, Err(SubmitError::WrongLength { expected: 8, actual: 3 }));
    }

    #[test]
    fn test_duplicate_checked_before_used() {
        let engine = engine();
        engine.start_game("u1");
        engine.submit_combination("u1", &SCENARIO).unwrap();

        // ADD_FIVE was used, SUBTRACT_THREE repeats.
        let combo = [
            ADD_FIVE, SUBTRACT_THREE, SUBTRACT_THREE, DIVIDE_TWO,
            SUBTRACT_FIVE, REVERSE_DIGITS, APPEND_TWO, APPEND_THREE,
        ];
        assert_eq!(
            engine.submit_combination("u1", &combo),
            Err(SubmitError::DuplicateSubmission(SUBTRACT_THREE.to_string()))
        );
    }

    #[test]
    fn test_unknown_checked_before_used_across_positions() {
        let engine = engine();
        engine.start_game("u1");
        engine.submit_combination("u1", &SCENARIO).unwrap();

        // Used symbol first, unknown symbol last: the unknown one is reported.
        let combo = [
            ADD_FIVE, SUBTRACT_THREE, DIVIDE_TWO, SUBTRACT_FIVE,
            REVERSE_DIGITS, APPEND_TWO, APPEND_THREE, "zz",
        ];
        assert_eq!(
            engine.submit_combination("u1", &combo),
            Err(SubmitError::UnknownSymbol("zz".to_string()))
        );
        assert_eq!(engine.session("u1").unwrap().used_symbols().len(), 8);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let engine = engine();
        engine.start_game("u1");
        let before = engine.session("u1").unwrap();

        let mut combo = SCENARIO;
        combo[7] = "nope";
        assert_eq!(
            engine.submit_combination("u1", &combo),
            Err(SubmitError::UnknownSymbol("nope".to_string()))
        );

        assert_eq!(engine.session("u1").unwrap(), before);
        assert_eq!(engine.record("u1"), None);
    }

    #[test]
    fn test_offered_scope_rejects_unoffered_symbols() {
        let engine = GameEngine::new(
            EngineConfig::default()
                .with_seed(3)
                .with_symbol_scope(SymbolScope::Offered),
        )
        .unwrap();

        let start = engine.start_game("u1");
        let hidden = engine
            .catalog()
            .symbols()
            .find(|s| !start.offered_symbols.iter().any(|o| o == s))
            .unwrap()
            .to_string();

        let mut combo: Vec<String> = start.offered_symbols[..7].to_vec();
        combo.push(hidden.clone());

        assert_eq!(
            engine.submit_combination("u1", &combo),
            Err(SubmitError::UnknownSymbol(hidden))
        );
    }

    #[test]
    fn test_config_validated_against_catalog() {
        let catalog = ActionCatalog::builder()
            .action("a", ActionKind::add(1))
            .build()
            .unwrap();

        let result = GameEngine::with_catalog(catalog, EngineConfig::default());
        assert!(matches!(
            result,
            Err(EngineError::Config(ConfigError::OfferTooLarge { offered: 15, catalog: 1 }))
        ));
    }

    #[test]
    fn test_top_records_uses_configured_size() {
        let engine = GameEngine::new(EngineConfig::default().with_seed(1).with_leaderboard_size(1)).unwrap();
        for player in ["a", "b"] {
            engine.start_game(player);
            engine.submit_combination(player, &SCENARIO).unwrap();
        }

        let top = engine.top_records();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].player.as_str(), "a");
    }

    #[test]
    fn test_describe_catalog() {
        let described = engine().describe_catalog();
        assert_eq!(described.len(), 19);
        assert_eq!(described[12], (MULTIPLY_HUNDRED.to_string(), "Multiplies the number by 100".to_string()));
    }
}
