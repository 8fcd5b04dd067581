//! Pure helpers over an ordered item collection.
//!
//! The state machine never mutates a collection in place: it computes the next
//! whole collection with these helpers and hands it to
//! [`ItemStore::replace`](crate::storage::ItemStore::replace). Order is
//! insertion/update order; display order is derived separately.

use crate::domain::{Item, ItemId};
use std::collections::HashSet;

/// Removes any item sharing `item`'s id and puts `item` at the front.
///
/// # Examples
///
/// ```
/// use keylist::storage::collection::upsert_front;
/// use keylist::Item;
///
/// let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
/// let next = upsert_front(&items, Item::new("2", "Pan integral"));
/// assert_eq!(next[0].name, "Pan integral");
/// assert_eq!(next.len(), 2);
/// ```
#[must_use]
pub fn upsert_front(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = Vec::with_capacity(items.len() + 1);
    let id = item.id.clone();
    next.push(item);
    next.extend(items.iter().filter(|i| i.id != id).cloned());
    next
}

/// Adds `item` at the end of the collection.
#[must_use]
pub fn append(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Drops the item with the given id, if present.
#[must_use]
pub fn remove(items: &[Item], id: &ItemId) -> Vec<Item> {
    items.iter().filter(|i| &i.id != id).cloned().collect()
}

/// Applies `f` to the item with the given id without moving it.
#[must_use]
pub fn update<F>(items: &[Item], id: &ItemId, f: F) -> Vec<Item>
where
    F: Fn(&mut Item),
{
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if &item.id == id {
                f(&mut item);
            }
            item
        })
        .collect()
}

#[must_use]
pub fn find<'a>(items: &'a [Item], id: &ItemId) -> Option<&'a Item> {
    items.iter().find(|i| &i.id == id)
}

#[must_use]
pub fn contains_id(items: &[Item], id: &ItemId) -> bool {
    find(items, id).is_some()
}

/// Cleans up a collection read from storage.
///
/// Quantities are raised to their floor and later duplicates of an id are
/// dropped, keeping the first occurrence.
#[must_use]
pub fn normalize(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let before = items.len();

    let normalized: Vec<Item> = items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .map(Item::normalized)
        .collect();

    if normalized.len() != before {
        tracing::warn!(
            dropped = before - normalized.len(),
            "dropped items with duplicated ids"
        );
    }

    normalized
}
