//! Leaderboard derived from per-player records.

pub mod ranking;

pub use ranking::{rank, Leaderboard, LeaderboardEntry};
