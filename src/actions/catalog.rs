//! Action catalog: the fixed set of symbols a game can use.
//!
//! The `ActionCatalog` is built once through [`CatalogBuilder`] and never
//! changes afterwards, so it can be shared between threads freely.
//! Iteration follows registration order.

use rustc_hash::FxHashMap;

use super::kind::{Action, ActionKind};
use crate::core::CatalogError;

/// Symbols of the reference catalog.
pub mod symbols {
    pub const ADD_FIVE: &str = "\u{2795}";
    pub const SUBTRACT_THREE: &str = "\u{2796}";
    pub const MULTIPLY_TWO: &str = "\u{2716}\u{FE0F}";
    pub const DIVIDE_TWO: &str = "\u{2797}";
    pub const ADD_TEN: &str = "\u{1F53C}";
    pub const SUBTRACT_FIVE: &str = "\u{1F53D}";
    pub const APPEND_LAST_DIGIT: &str = "\u{1F522}";
    pub const SHUFFLE_DIGITS: &str = "\u{1F500}";
    pub const REVERSE_DIGITS: &str = "\u{1F504}";
    pub const ADD_LAST_TWO_DIGITS: &str = "\u{1F4C8}";
    pub const SUBTRACT_LAST_DIGIT: &str = "\u{1F4C9}";
    pub const RANDOM_MULTIPLY: &str = "\u{1F3B2}";
    pub const MULTIPLY_HUNDRED: &str = "\u{1F4AF}";
    pub const MULTIPLY_TEN: &str = "\u{1F51F}";
    pub const APPEND_ONE: &str = "1\u{FE0F}\u{20E3}";
    pub const APPEND_TWO: &str = "2\u{FE0F}\u{20E3}";
    pub const APPEND_THREE: &str = "3\u{FE0F}\u{20E3}";
    pub const APPEND_FOUR: &str = "4\u{FE0F}\u{20E3}";
    pub const APPEND_FIVE: &str = "5\u{FE0F}\u{20E3}";
}

/// Immutable registry of actions keyed by symbol.
///
/// ## Example
///
/// ```
/// use emoji_math::actions::{ActionCatalog, ActionKind};
/// use emoji_math::core::GameRng;
///
/// let catalog = ActionCatalog::builder()
///     .action("+", ActionKind::add(5))
///     .action("x", ActionKind::multiply(2))
///     .build()
///     .unwrap();
///
/// let mut rng = GameRng::new(0);
/// let doubled = catalog.get("x").unwrap().apply(6, &mut rng);
/// assert_eq!(doubled, 12);
/// ```
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    actions: Vec<Action>,
    index: FxHashMap<String, usize>,
}

impl ActionCatalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The 19-action catalog of the reference game.
    #[must_use]
    pub fn reference() -> Self {
        use symbols::*;

        let builder = Self::builder()
            .action(ADD_FIVE, ActionKind::add(5))
            .action(SUBTRACT_THREE, ActionKind::subtract(3))
            .action(MULTIPLY_TWO, ActionKind::multiply(2))
            .action(DIVIDE_TWO, ActionKind::divide(2))
            .action(ADD_TEN, ActionKind::add(10))
            .action(SUBTRACT_FIVE, ActionKind::subtract(5))
            .action(APPEND_LAST_DIGIT, ActionKind::AppendLastDigit)
            .action(SHUFFLE_DIGITS, ActionKind::ShuffleDigits)
            .action(REVERSE_DIGITS, ActionKind::ReverseDigits)
            .action(ADD_LAST_TWO_DIGITS, ActionKind::AddLastTwoDigits)
            .action(SUBTRACT_LAST_DIGIT, ActionKind::SubtractLastDigit)
            .action(RANDOM_MULTIPLY, ActionKind::random_multiply())
            .action(MULTIPLY_HUNDRED, ActionKind::multiply(100))
            .action(MULTIPLY_TEN, ActionKind::multiply(10))
            .action(APPEND_ONE, ActionKind::append_digit(1))
            .action(APPEND_TWO, ActionKind::append_digit(2))
            .action(APPEND_THREE, ActionKind::append_digit(3))
            .action(APPEND_FOUR, ActionKind::append_digit(4))
            .action(APPEND_FIVE, ActionKind::append_digit(5));

        // All registrations above are valid.
        builder.build_unchecked()
    }

    /// Look up an action by symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Action> {
        self.index.get(symbol).map(|&i| &self.actions[i])
    }

    /// Check if a symbol is registered.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// Get the number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over actions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Iterate over symbols in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.symbol.as_str())
    }

    /// `(symbol, description)` pairs for help text.
    #[must_use]
    pub fn describe(&self) -> Vec<(String, String)> {
        self.actions
            .iter()
            .map(|a| (a.symbol.clone(), a.describe()))
            .collect()
    }
}

/// Builder for [`ActionCatalog`]. Validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    actions: Vec<Action>,
}

impl CatalogBuilder {
    /// Register a symbol.
    #[must_use]
    pub fn action(mut self, symbol: impl Into<String>, kind: ActionKind) -> Self {
        self.actions.push(Action::new(symbol, kind));
        self
    }

    /// Validate every registration and freeze the catalog.
    pub fn build(self) -> Result<ActionCatalog, CatalogError> {
        let mut index = FxHashMap::default();

        for (i, action) in self.actions.iter().enumerate() {
            if action.symbol.is_empty() {
                return Err(CatalogError::EmptySymbol);
            }
            action.kind.validate(&action.symbol)?;
            if index.insert(action.symbol.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSymbol(action.symbol.clone()));
            }
        }

        Ok(ActionCatalog {
            actions: self.actions,
            index,
        })
    }

    fn build_unchecked(self) -> ActionCatalog {
        let index = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| (a.symbol.clone(), i))
            .collect();

        ActionCatalog {
            actions: self.actions,
            index,
        }
    }
}
