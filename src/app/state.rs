//! Session state: the store handle plus the transient search state.
//!
//! [`AppState`] is the single writer of the item store. Each dispatched event
//! is fully processed before the next one: the store is replaced first, then
//! the new search state is installed, so a failed write leaves the session
//! exactly as it was.
//!
//! # Example
//!
//! ```
//! use keylist::app::{AppState, ControlKey, Event, Key};
//! use keylist::app::services::{AutoConfirm, RandomIds, Services};
//! use keylist::storage::{ItemStore, MemoryStore};
//!
//! let mut app = AppState::new(MemoryStore::default());
//! let (mut confirm, mut ids) = (AutoConfirm(true), RandomIds);
//! let mut services = Services::new(&mut confirm, &mut ids);
//!
//! for c in "Pan".chars() {
//!     app.dispatch(&Event::Key(Key::Character(c)), &mut services)?;
//! }
//! app.dispatch(&Event::Key(Key::Control(ControlKey::Save)), &mut services)?;
//!
//! assert_eq!(app.store().list()?[0].name, "Pan");
//! # Ok::<(), keylist::KeylistError>(())
//! ```

use super::handler::{handle_event, Event};
use super::modes::{Mode, SearchState};
use super::services::Services;
use crate::domain::error::Result;
use crate::domain::Item;
use crate::storage::ItemStore;
use crate::ui::projection::project;
use crate::ui::viewmodel::ViewModel;

/// Central session container.
#[derive(Debug)]
pub struct AppState<S> {
    /// Persisted collection; only written through [`dispatch`](Self::dispatch).
    store: S,

    /// `None` while browsing. Never persisted.
    search: Option<SearchState>,
}

impl<S: ItemStore> AppState<S> {
    /// Starts a session in browsing mode.
    pub const fn new(store: S) -> Self {
        Self {
            store,
            search: None,
        }
    }

    #[must_use]
    pub const fn search(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Current items in store order.
    ///
    /// # Errors
    ///
    /// Propagates store read errors.
    pub fn items(&self) -> Result<Vec<Item>> {
        self.store.list()
    }

    /// # Errors
    ///
    /// Propagates store read errors.
    pub fn mode(&self) -> Result<Mode> {
        Ok(Mode::of(self.search.as_ref(), &self.store.list()?))
    }

    /// Processes one event and applies the resulting transition.
    ///
    /// Returns `true` when the search state or the collection changed, i.e.
    /// when the view needs to be redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the new collection
    /// cannot be persisted. The search state is left untouched on error.
    pub fn dispatch(&mut self, event: &Event, services: &mut Services<'_>) -> Result<bool> {
        let _span = tracing::debug_span!("dispatch", event = ?event).entered();

        let items = self.store.list()?;
        let transition = handle_event(self.search.as_ref(), &items, event, services);

        let mut changed = false;

        if let Some(next_items) = transition.next_items {
            if next_items != items {
                self.store.replace(next_items)?;
                changed = true;
            }
        }

        if transition.next_state != self.search {
            tracing::debug!(
                from = ?Mode::of(self.search.as_ref(), &items),
                text = transition.next_state.as_ref().map_or("", |s| s.text.as_str()),
                "search state changed"
            );
            self.search = transition.next_state;
            changed = true;
        }

        Ok(changed)
    }

    /// Projects the current view.
    ///
    /// # Errors
    ///
    /// Propagates store read errors.
    pub fn view(&self) -> Result<ViewModel> {
        Ok(project(self.search.as_ref(), &self.store.list()?))
    }
}
