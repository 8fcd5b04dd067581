//! Item store abstraction.
//!
//! This module defines the [`ItemStore`] trait the session writes through.
//! It is deliberately small: the state machine computes whole collections, so
//! a backend only needs to hand out the current list and swap in a new one.

use crate::domain::error::Result;
use crate::domain::Item;
use crate::storage::collection;

/// Abstraction over persistent item collections.
///
/// # Implementations
///
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process `Vec`
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes
///
/// # Examples
///
/// ```
/// use keylist::storage::{ItemStore, MemoryStore};
/// use keylist::Item;
///
/// let mut store = MemoryStore::new(vec![Item::new("1", "Arroz")]);
/// store.upsert_front(Item::new("2", "Pan"))?;
/// assert_eq!(store.list()?[0].name, "Pan");
/// # Ok::<(), keylist::KeylistError>(())
/// ```
pub trait ItemStore {
    /// Returns the collection in insertion/update order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list(&self) -> Result<Vec<Item>>;

    /// Replaces the whole collection.
    ///
    /// Readers observe either the previous collection or the new one, never a
    /// mix of both.
    ///
    /// # Errors
    ///
    /// Returns an error if the new collection cannot be persisted. The
    /// previous collection is left in place in that case.
    fn replace(&mut self, items: Vec<Item>) -> Result<()>;

    /// Removes any item with the same id and inserts `item` at the front.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`list`](Self::list) and [`replace`](Self::replace).
    fn upsert_front(&mut self, item: Item) -> Result<()> {
        let items = self.list()?;
        self.replace(collection::upsert_front(&items, item))
    }
}
