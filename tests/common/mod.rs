//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use rand::rngs::mock::StepRng;
use tracing_subscriber::{fmt, EnvFilter};

use emoji_math::actions::symbols::*;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per process.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// The worked example: 1 → 240100.
pub const SCENARIO: [&str; 8] = [
    ADD_FIVE,
    MULTIPLY_TWO,
    ADD_TEN,
    APPEND_LAST_DIGIT,
    ADD_LAST_TWO_DIGITS,
    SUBTRACT_LAST_DIGIT,
    APPEND_ONE,
    MULTIPLY_HUNDRED,
];

/// Eight deterministic symbols disjoint from `SCENARIO`.
pub const SECOND_ROUND: [&str; 8] = [
    SUBTRACT_THREE,
    DIVIDE_TWO,
    SUBTRACT_FIVE,
    MULTIPLY_TEN,
    APPEND_TWO,
    APPEND_THREE,
    APPEND_FOUR,
    APPEND_FIVE,
];

/// RNG whose every draw is zero.
///
/// Under `rand` 0.8 a zero draw picks the bottom of any range, so random
/// multipliers land on their low bound and each shuffle step swaps with
/// the head.
pub fn zero_rng() -> StepRng {
    StepRng::new(0, 0)
}
