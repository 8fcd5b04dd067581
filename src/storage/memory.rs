//! In-memory item store, used by tests and by sessions that opt out of
//! persistence.

use crate::domain::error::Result;
use crate::domain::Item;
use crate::storage::backend::ItemStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemStore for MemoryStore {
    fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn replace(&mut self, items: Vec<Item>) -> Result<()> {
        tracing::trace!(count = items.len(), "memory store replaced");
        self.items = items;
        Ok(())
    }
}
