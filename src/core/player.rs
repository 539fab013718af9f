//! Player identification.
//!
//! Players are identified by whatever opaque string the transport layer
//! uses (a chat user id, a username). The engine never interprets it.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Opaque player identifier.
///
/// ```
/// use emoji_math::core::PlayerId;
///
/// let player = PlayerId::new("u1");
/// assert_eq!(player.as_str(), "u1");
/// assert_eq!(player, PlayerId::from("u1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
