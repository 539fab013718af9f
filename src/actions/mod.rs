//! Action system: kinds, digit helpers, and the catalog.
//!
//! ## Key Types
//!
//! - `ActionKind`: closed set of transformations with their parameters
//! - `Action`: a symbol bound to a kind
//! - `ActionCatalog`: immutable symbol lookup, registration ordered

pub mod catalog;
pub mod digits;
pub mod kind;

pub use catalog::{symbols, ActionCatalog, CatalogBuilder};
pub use kind::{Action, ActionKind};
