//! Action kinds and their transformation rules.
//!
//! Every operation a symbol can perform is one variant of [`ActionKind`].
//! The set is closed: adding an operation means adding a variant and its
//! arm in `apply` and `describe`.
//!
//! ## Arithmetic
//!
//! All arithmetic is fixed-width i64 with wrapping on overflow. Remainders
//! truncate toward zero, so `v mod 10` is negative for negative `v`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::digits;
use crate::core::CatalogError;

/// A transformation applied to the current value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// `v + delta`
    Add { delta: i64 },

    /// `v - delta`
    Subtract { delta: i64 },

    /// `v * factor`
    Multiply { factor: i64 },

    /// `v / divisor`, truncating. The divisor is checked nonzero at
    /// registration.
    Divide { divisor: i64 },

    /// `v * 10 + (v mod 10)`
    AppendLastDigit,

    /// Random permutation of the decimal digits.
    ShuffleDigits,

    /// Decimal digits in reverse order.
    ReverseDigits,

    /// `v + (v mod 100)`
    AddLastTwoDigits,

    /// `v - (v mod 10)`
    SubtractLastDigit,

    /// `v * r` with `r` uniform in `low..=high`.
    RandomMultiply { low: i64, high: i64 },

    /// `v * 10 + digit`
    AppendDigit { digit: i64 },
}

impl ActionKind {
    pub fn add(delta: i64) -> Self {
        Self::Add { delta }
    }

    pub fn subtract(delta: i64) -> Self {
        Self::Subtract { delta }
    }

    pub fn multiply(factor: i64) -> Self {
        Self::Multiply { factor }
    }

    pub fn divide(divisor: i64) -> Self {
        Self::Divide { divisor }
    }

    /// Random multiplier in the reference range 2..=6.
    pub fn random_multiply() -> Self {
        Self::RandomMultiply { low: 2, high: 6 }
    }

    pub fn append_digit(digit: i64) -> Self {
        Self::AppendDigit { digit }
    }

    /// Apply this action to `value`.
    ///
    /// Only `ShuffleDigits` and `RandomMultiply` draw from `rng`.
    ///
    /// # Panics
    ///
    /// Panics on `Divide { divisor: 0 }` and on `RandomMultiply` with
    /// `low > high`. [`validate`](Self::validate) rejects both, and every
    /// action in a built [`ActionCatalog`](super::ActionCatalog) has passed it.
    pub fn apply<R: Rng + ?Sized>(&self, value: i64, rng: &mut R) -> i64 {
        match *self {
            Self::Add { delta } => value.wrapping_add(delta),
            Self::Subtract { delta } => value.wrapping_sub(delta),
            Self::Multiply { factor } => value.wrapping_mul(factor),
            Self::Divide { divisor } => value.wrapping_div(divisor),
            Self::AppendLastDigit => value.wrapping_mul(10).wrapping_add(value % 10),
            Self::ShuffleDigits => digits::shuffle(value, rng),
            Self::ReverseDigits => digits::reverse(value),
            Self::AddLastTwoDigits => value.wrapping_add(value % 100),
            Self::SubtractLastDigit => value.wrapping_sub(value % 10),
            Self::RandomMultiply { low, high } => value.wrapping_mul(rng.gen_range(low..=high)),
            Self::AppendDigit { digit } => value.wrapping_mul(10).wrapping_add(digit),
        }
    }

    /// Whether `apply` is a pure function of its input.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Self::ShuffleDigits | Self::RandomMultiply { .. })
    }

    /// Integer parameters fixed at registration.
    #[must_use]
    pub fn params(&self) -> SmallVec<[i64; 2]> {
        match *self {
            Self::Add { delta } | Self::Subtract { delta } => smallvec![delta],
            Self::Multiply { factor } => smallvec![factor],
            Self::Divide { divisor } => smallvec![divisor],
            Self::RandomMultiply { low, high } => smallvec![low, high],
            Self::AppendDigit { digit } => smallvec![digit],
            Self::AppendLastDigit
            | Self::ShuffleDigits
            | Self::ReverseDigits
            | Self::AddLastTwoDigits
            | Self::SubtractLastDigit => SmallVec::new(),
        }
    }

    /// Human-readable description for help text.
    #[must_use]
    pub fn describe(&self) -> String {
        match *self {
            Self::Add { delta } => format!("Adds {} to the number", delta),
            Self::Subtract { delta } => format!("Subtracts {} from the number", delta),
            Self::Multiply { factor } => format!("Multiplies the number by {}", factor),
            Self::Divide { divisor } => format!("Divides the number by {}", divisor),
            Self::AppendLastDigit => "Appends the last digit of the number to its end".to_string(),
            Self::ShuffleDigits => "Shuffles the digits of the number".to_string(),
            Self::ReverseDigits => "Reverses the number".to_string(),
            Self::AddLastTwoDigits => "Adds the last two digits of the number to it".to_string(),
            Self::SubtractLastDigit => "Subtracts the last digit of the number from it".to_string(),
            Self::RandomMultiply { low, high } => {
                format!("Multiplies the number by a random value from {} to {}", low, high)
            }
            Self::AppendDigit { digit } => format!("Appends the digit {} to the number", digit),
        }
    }

    /// Reject parameters that make the action ill-defined.
    pub fn validate(&self, symbol: &str) -> Result<(), CatalogError> {
        match *self {
            Self::Divide { divisor: 0 } => Err(CatalogError::ZeroDivisor(symbol.to_string())),
            Self::AppendDigit { digit } if !(0..=9).contains(&digit) => {
                Err(CatalogError::InvalidDigit {
                    symbol: symbol.to_string(),
                    digit,
                })
            }
            Self::RandomMultiply { low, high } if low > high => Err(CatalogError::InvalidRange {
                symbol: symbol.to_string(),
                low,
                high,
            }),
            _ => Ok(()),
        }
    }
}

/// A registered action: a symbol bound to a kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The symbol players submit.
    pub symbol: String,

    /// What the symbol does.
    pub kind: ActionKind,
}

impl Action {
    #[must_use]
    pub fn new(symbol: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
        }
    }

    /// Apply the kind to `value`. Panics under the same conditions as
    /// [`ActionKind::apply`].
    pub fn apply<R: Rng + ?Sized>(&self, value: i64, rng: &mut R) -> i64 {
        self.kind.apply(value, rng)
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}
