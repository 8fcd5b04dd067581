//! Domain layer: the checklist item model and the crate error type.
//!
//! Nothing in here knows about keys, storage backends or rendering.
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: `Item`, `ItemId` and the seed list

pub mod error;
pub mod item;

pub use error::{KeylistError, Result};
pub use item::{seed_items, Item, ItemId, DEFAULT_PRIORITY, DEFAULT_QUANTITY};
