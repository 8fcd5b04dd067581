//! Transient search/edit state and the input mode derived from it.
//!
//! # State Machine
//!
//! The keyboard operates in one of three modes, all derived from an optional
//! [`SearchState`] and the current items:
//! - **Browsing**: no search state; the whole sorted list is shown
//! - **Searching**: search state without an id; the text filters the list
//! - **Editing**: search state whose id resolves to an item; the text is the
//!   item's name in progress
//!
//! A search state whose id no longer resolves (the item was removed
//! elsewhere) behaves as searching with the remaining text.

use crate::domain::{Item, ItemId};
use crate::storage::collection;

/// Transient text buffer plus the item being edited, if any. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Item being edited. `None` while searching.
    pub id: Option<ItemId>,

    /// Live text buffer.
    pub text: String,

    /// Copied from the item on edit start; not read for display.
    pub quantity: Option<u32>,

    /// Copied from the item on edit start; not read for display.
    pub priority: Option<u32>,
}

impl SearchState {
    /// A plain search over `text`.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Edit state for `item` with the buffer pre-filled to its name.
    #[must_use]
    pub fn editing(item: &Item) -> Self {
        Self {
            id: Some(item.id.clone()),
            text: item.name.clone(),
            quantity: Some(item.quantity),
            priority: Some(item.priority),
        }
    }

    /// Same state with a different text buffer.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Resolves the edited item against `items`.
    #[must_use]
    pub fn editing_item<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        self.id.as_ref().and_then(|id| collection::find(items, id))
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Searching,
    Editing,
}

impl Mode {
    #[must_use]
    pub fn of(state: Option<&SearchState>, items: &[Item]) -> Self {
        match state {
            None => Self::Browsing,
            Some(state) if state.editing_item(items).is_some() => Self::Editing,
            Some(_) => Self::Searching,
        }
    }
}
