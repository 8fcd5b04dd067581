//! Collaborators the state machine calls out to.
//!
//! Two decisions cannot be derived from state and key alone: whether the user
//! really wants an item deleted, and what id a new item gets. Both sit behind
//! small traits so the handler stays deterministic under test.

use crate::domain::ItemId;

/// Number of random bytes in a generated id (hex-encoded to twice as many
/// characters).
const ID_BYTES: usize = 5;

/// Synchronous yes/no prompt for destructive actions.
pub trait Confirm {
    /// Asks the user `prompt` and returns whether they approved.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Source of fresh item identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// Ids from cryptographically random bytes, hex-encoded.
///
/// # Examples
///
/// ```
/// use keylist::app::services::{IdGenerator, RandomIds};
///
/// let id = RandomIds.next_id();
/// assert_eq!(id.as_str().len(), 10);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ItemId {
        use rand::Rng;

        let mut bytes = [0u8; ID_BYTES];
        rand::rng().fill(&mut bytes[..]);
        ItemId::new(hex::encode(bytes))
    }
}

/// Approves or declines every prompt without asking.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::debug!(prompt = %prompt, approved = self.0, "auto-confirming");
        self.0
    }
}

/// Both collaborators, borrowed for the duration of one event.
pub struct Services<'a> {
    pub confirm: &'a mut dyn Confirm,
    pub ids: &'a mut dyn IdGenerator,
}

impl<'a> Services<'a> {
    pub fn new(confirm: &'a mut dyn Confirm, ids: &'a mut dyn IdGenerator) -> Self {
        Self { confirm, ids }
    }
}

impl std::fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_differ() {
        let mut ids = RandomIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }
}
