//! Session state and the store holding it.
//!
//! - `Session`: one player's in-progress game
//! - `Record`: one player's best final value
//! - `SessionStore`: per-player slots with per-player locking

pub mod state;
pub mod store;

pub use state::{Record, RecordEntry, Session};
pub use store::SessionStore;
