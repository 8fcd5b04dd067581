//! Checklist item model.
//!
//! An [`Item`] is one line of the checklist. Optional attributes (completion,
//! quantity, priority) are stored as plain fields with explicit defaults, so an
//! attribute missing from persisted data and an attribute holding its default
//! value are the same thing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity assigned to items that never had one. Quantities never go below it.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Priority assigned to items that never had one.
pub const DEFAULT_PRIORITY: u32 = 0;

/// Opaque, immutable item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

const fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

/// A single checklist entry.
///
/// # Fields
///
/// - `id`: unique within a collection, never changes
/// - `name`: display text, edited through the keyboard buffer
/// - `completed`: checked off; absent in storage means `false`
/// - `quantity`: how many to get; absent means 1, never below 1
/// - `priority`: sort weight; absent means 0
///
/// # Examples
///
/// ```
/// use keylist::Item;
///
/// let item: Item = serde_json::from_str(r#"{"id":"1","name":"Arroz"}"#).unwrap();
/// assert!(!item.completed);
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.priority, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub priority: u32,
}

impl Item {
    /// Creates an incomplete item with default quantity and priority.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
            quantity: DEFAULT_QUANTITY,
            priority: DEFAULT_PRIORITY,
        }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = if quantity < DEFAULT_QUANTITY {
            DEFAULT_QUANTITY
        } else {
            quantity
        };
        self
    }

    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns a copy with `completed` flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Raises a quantity read from storage back to the floor.
    #[must_use]
    pub fn normalized(self) -> Self {
        let quantity = self.quantity;
        self.with_quantity(quantity)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The list a fresh installation starts with.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("1", "Arroz"),
        Item::new("3", "Leche"),
        Item::new("4", "Pan"),
        Item::new("6", "Azúcar"),
        Item::new("7", "Sal"),
        Item::new("8", "Aceite"),
        Item::new("2", "Huevos").with_priority(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let item: Item = serde_json::from_str(r#"{"id":"9","name":"Sal"}"#).unwrap();
        assert_eq!(item, Item::new("9", "Sal"));
    }

    #[test]
    fn zero_quantity_is_raised_on_normalize() {
        let item: Item =
            serde_json::from_str(r#"{"id":"9","name":"Sal","quantity":0}"#).unwrap();
        assert_eq!(item.quantity, 0);
        assert_eq!(item.normalized().quantity, 1);
    }

    #[test]
    fn toggled_flips_only_completion() {
        let item = Item::new("2", "Huevos").with_priority(2);
        let toggled = item.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.priority, 2);
        assert!(!toggled.toggled().completed);
    }

    #[test]
    fn seed_ids_are_unique() {
        let items = seed_items();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
