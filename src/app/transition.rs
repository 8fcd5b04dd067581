//! Result of handling one event.
//!
//! The handler never touches the store. It returns a [`Transition`] describing
//! the next search state and, when the collection changed, the whole next
//! collection. The session applies it: replace the store contents first, then
//! install the new search state.

use super::modes::SearchState;
use crate::domain::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Search state after the event. `None` means browsing.
    pub next_state: Option<SearchState>,

    /// Next collection, or `None` when the collection is unchanged.
    pub next_items: Option<Vec<Item>>,
}

impl Transition {
    /// Keeps the current state and collection.
    #[must_use]
    pub fn unchanged(state: Option<&SearchState>) -> Self {
        Self {
            next_state: state.cloned(),
            next_items: None,
        }
    }

    /// Moves to `next_state` without touching the collection.
    #[must_use]
    pub const fn to_state(next_state: Option<SearchState>) -> Self {
        Self {
            next_state,
            next_items: None,
        }
    }

    /// Back to browsing, collection unchanged.
    #[must_use]
    pub const fn cancel() -> Self {
        Self::to_state(None)
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.next_items = Some(items);
        self
    }
}
