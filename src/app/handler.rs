//! Input interpretation: key and item events to transitions.
//!
//! # Architecture
//!
//! 1. The session lists the current items and hands them, the current search
//!    state and the event to [`handle_event`]
//! 2. Key events go through [`handle_key`], which checks its rules in a fixed
//!    precedence order; the first matching rule decides the outcome
//! 3. The returned [`Transition`] carries the next state and, if anything
//!    changed, the whole next collection
//!
//! The handler is total: every (state, items, event) triple yields a
//! transition. A search state pointing at an item that no longer exists
//! behaves as a plain search over its remaining text.
//!
//! # Key Rules
//!
//! | key | editing | not editing |
//! |---|---|---|
//! | save | rename, back to browsing | create item and edit it |
//! | long-press-backspace | clear text only | back to browsing |
//! | toggle | flip edited item | flip highlighted item, back to browsing |
//! | select | demote to search (or cancel if empty) | edit highlighted item |
//! | delete | confirm, remove, back to browsing | no-op |
//! | increase/decrease/priority± | adjust in place | no-op |
//! | anything else | update text, stay editing | update text or cancel if empty |

use super::keys::{apply_key_to_buffer, ControlKey, Key};
use super::modes::SearchState;
use super::services::Services;
use super::transition::Transition;
use crate::domain::{Item, ItemId, DEFAULT_PRIORITY, DEFAULT_QUANTITY};
use crate::storage::collection;
use crate::ui::projection::highlighted_candidate;

/// Everything the session can be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key event from the virtual keyboard, already gesture-resolved.
    Key(Key),
    /// Tap on a list row: flips the item's completion.
    ItemPressed(ItemId),
    /// Long-press on a list row: starts editing it, or leaves edit mode.
    ItemLongPressed(ItemId),
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// Processes one event against the current state and items.
///
/// # Example
///
/// ```
/// use keylist::app::{handle_event, Event, Key};
/// use keylist::app::services::{AutoConfirm, RandomIds, Services};
/// use keylist::Item;
///
/// let items = vec![Item::new("1", "Pan")];
/// let (mut confirm, mut ids) = (AutoConfirm(false), RandomIds);
/// let mut services = Services::new(&mut confirm, &mut ids);
///
/// let t = handle_event(None, &items, &Event::Key(Key::Character('P')), &mut services);
/// assert_eq!(t.next_state.unwrap().text, "P");
/// assert!(t.next_items.is_none());
/// ```
pub fn handle_event(
    state: Option<&SearchState>,
    items: &[Item],
    event: &Event,
    services: &mut Services<'_>,
) -> Transition {
    match event {
        Event::Key(key) => handle_key(state, items, *key, services),
        Event::ItemPressed(id) => {
            let Some(item) = collection::find(items, id) else {
                tracing::debug!(item_id = %id, "pressed item not found");
                return Transition::unchanged(state);
            };

            tracing::debug!(item_id = %id, completed = !item.completed, "item toggled from list");
            Transition::unchanged(state).with_items(collection::upsert_front(items, item.toggled()))
        }
        Event::ItemLongPressed(id) => {
            if state.and_then(|s| s.editing_item(items)).is_some() {
                tracing::debug!("leaving edit mode from list");
                return Transition::cancel();
            }

            Transition::to_state(collection::find(items, id).map(SearchState::editing))
        }
    }
}

/// Processes one key event.
///
/// Rules are evaluated in precedence order; see the module docs for the
/// table.
#[allow(clippy::too_many_lines)]
pub fn handle_key(
    state: Option<&SearchState>,
    items: &[Item],
    key: Key,
    services: &mut Services<'_>,
) -> Transition {
    let _span = tracing::debug_span!("handle_key", key = %key).entered();

    let text = state.map_or("", |s| s.text.as_str());
    let buffer = apply_key_to_buffer(text, key);
    let editing = state.and_then(|s| s.editing_item(items));

    let Key::Control(control) = key else {
        return edit_buffer(state, editing.is_some(), buffer);
    };

    match control {
        ControlKey::Shift | ControlKey::NumToggle => Transition::unchanged(state),

        ControlKey::Save => {
            if buffer.trim().is_empty() {
                tracing::debug!("save with empty buffer, cancelling");
                return Transition::cancel();
            }

            if let Some(item) = editing {
                tracing::debug!(item_id = %item.id, name = %buffer, "renaming item");
                let renamed = Item {
                    name: buffer,
                    ..item.clone()
                };
                return Transition::cancel().with_items(collection::upsert_front(items, renamed));
            }

            let item = Item::new(fresh_id(items, services), buffer);
            tracing::debug!(item_id = %item.id, name = %item.name, "creating item");
            let next_state = SearchState {
                id: Some(item.id.clone()),
                text: item.name.clone(),
                ..SearchState::default()
            };
            Transition::to_state(Some(next_state)).with_items(collection::append(items, item))
        }

        ControlKey::LongPressBackspace => match (state, editing) {
            (Some(state), Some(_)) => Transition::to_state(Some(state.with_text(""))),
            _ => Transition::cancel(),
        },

        ControlKey::Toggle => {
            let Some(target) = editing.or_else(|| highlighted_candidate(items, text)) else {
                tracing::debug!("nothing to toggle");
                return Transition::unchanged(state);
            };

            tracing::debug!(item_id = %target.id, completed = !target.completed, "toggling item");
            let next_items = collection::upsert_front(items, target.toggled());

            let next = if editing.is_some() {
                Transition::unchanged(state)
            } else {
                Transition::cancel()
            };
            next.with_items(next_items)
        }

        ControlKey::Select => match (state, editing) {
            (Some(state), Some(_)) if !buffer.trim().is_empty() => {
                tracing::debug!("demoting edit to search");
                Transition::to_state(Some(SearchState::search(state.text.clone())))
            }
            (_, Some(_)) => Transition::cancel(),
            (_, None) => match highlighted_candidate(items, text) {
                Some(item) => {
                    tracing::debug!(item_id = %item.id, "editing highlighted item");
                    Transition::to_state(Some(SearchState::editing(item)))
                }
                None => Transition::unchanged(state),
            },
        },

        ControlKey::Delete => {
            let Some(item) = editing else {
                return Transition::unchanged(state);
            };

            if !services.confirm.confirm(&format!("Delete {}?", item.name)) {
                tracing::debug!(item_id = %item.id, "delete declined");
                return Transition::unchanged(state);
            }

            tracing::debug!(item_id = %item.id, "deleting item");
            Transition::cancel().with_items(collection::remove(items, &item.id))
        }

        ControlKey::Increase
        | ControlKey::Decrease
        | ControlKey::PriorityMinus
        | ControlKey::PriorityPlus => {
            let Some(item) = editing else {
                return Transition::unchanged(state);
            };

            let next_items = collection::update(items, &item.id, |item| adjust(item, control));
            Transition::unchanged(state).with_items(next_items)
        }

        ControlKey::Backspace | ControlKey::Space => edit_buffer(state, editing.is_some(), buffer),
    }
}

/// Fallback rule: set the buffer, keeping edit mode even when it empties.
fn edit_buffer(state: Option<&SearchState>, editing: bool, buffer: String) -> Transition {
    if buffer.is_empty() && !editing {
        return Transition::cancel();
    }

    let next = state.map_or_else(
        || SearchState::search(buffer.clone()),
        |s| s.with_text(buffer.clone()),
    );
    tracing::trace!(text = %next.text, "buffer updated");
    Transition::to_state(Some(next))
}

fn adjust(item: &mut Item, key: ControlKey) {
    match key {
        ControlKey::Increase => item.quantity = item.quantity.saturating_add(1),
        ControlKey::Decrease => {
            item.quantity = item.quantity.saturating_sub(1).max(DEFAULT_QUANTITY);
        }
        ControlKey::PriorityPlus => item.priority = item.priority.saturating_add(1),
        ControlKey::PriorityMinus => {
            item.priority = item.priority.saturating_sub(1).max(DEFAULT_PRIORITY);
        }
        _ => return,
    }
    tracing::debug!(
        item_id = %item.id,
        quantity = item.quantity,
        priority = item.priority,
        "item adjusted"
    );
}

/// Draws ids until one is not already taken.
fn fresh_id(items: &[Item], services: &mut Services<'_>) -> ItemId {
    loop {
        let id = services.ids.next_id();
        if !collection::contains_id(items, &id) {
            return id;
        }
        tracing::debug!(item_id = %id, "generated id already in use, drawing again");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::{AutoConfirm, IdGenerator};
    use pretty_assertions::assert_eq;

    struct FixedIds(Vec<&'static str>);

    impl IdGenerator for FixedIds {
        fn next_id(&mut self) -> ItemId {
            ItemId::from(self.0.remove(0))
        }
    }

    fn run(state: Option<&SearchState>, items: &[Item], key: Key, approve: bool) -> Transition {
        let mut confirm = AutoConfirm(approve);
        let mut ids = FixedIds(vec!["new"]);
        let mut services = Services::new(&mut confirm, &mut ids);
        handle_key(state, items, key, &mut services)
    }

    fn control(key: ControlKey) -> Key {
        Key::Control(key)
    }

    #[test]
    fn fresh_id_skips_taken_ids() {
        let items = vec![Item::new("a", "Pan")];
        let mut confirm = AutoConfirm(true);
        let mut ids = FixedIds(vec!["a", "b"]);
        let mut services = Services::new(&mut confirm, &mut ids);
        assert_eq!(fresh_id(&items, &mut services), ItemId::from("b"));
    }

    #[test]
    fn shift_and_num_toggle_change_nothing() {
        let state = SearchState::search("pa");
        for key in [ControlKey::Shift, ControlKey::NumToggle] {
            let t = run(Some(&state), &[], control(key), true);
            assert_eq!(t, Transition::unchanged(Some(&state)));
        }
    }

    #[test]
    fn save_whitespace_only_cancels() {
        let state = SearchState::search("");
        let t = run(Some(&state), &[], control(ControlKey::Save), true);
        assert_eq!(t, Transition::cancel());
    }

    #[test]
    fn save_keeps_trailing_space_in_name() {
        let state = SearchState::search("Pan ");
        let t = run(Some(&state), &[], control(ControlKey::Save), true);
        let items = t.next_items.unwrap();
        assert_eq!(items[0].name, "Pan ");
        assert_eq!(t.next_state.unwrap().id, Some(ItemId::from("new")));
    }

    #[test]
    fn rename_moves_item_to_front() {
        let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
        let state = SearchState::editing(&items[1]).with_text("Pan dulce");
        let t = run(Some(&state), &items, control(ControlKey::Save), true);

        assert_eq!(t.next_state, None);
        let next = t.next_items.unwrap();
        assert_eq!(next[0], Item::new("2", "Pan dulce"));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn long_press_backspace_keeps_edit_fields() {
        let items = vec![Item::new("1", "Arroz").with_priority(3)];
        let state = SearchState::editing(&items[0]);
        let t = run(Some(&state), &items, control(ControlKey::LongPressBackspace), true);

        let next = t.next_state.unwrap();
        assert_eq!(next.text, "");
        assert_eq!(next.id, Some(ItemId::from("1")));
        assert_eq!(next.priority, Some(3));
    }

    #[test]
    fn long_press_backspace_while_searching_cancels() {
        let state = SearchState::search("arr");
        let t = run(Some(&state), &[], control(ControlKey::LongPressBackspace), true);
        assert_eq!(t, Transition::cancel());
    }

    #[test]
    fn toggle_while_editing_stays_editing() {
        let items = vec![Item::new("1", "Arroz")];
        let state = SearchState::editing(&items[0]);
        let t = run(Some(&state), &items, control(ControlKey::Toggle), true);

        assert_eq!(t.next_state, Some(state));
        assert!(t.next_items.unwrap()[0].completed);
    }

    #[test]
    fn toggle_without_target_is_noop() {
        let items = vec![Item::new("1", "Arroz")];
        let t = run(None, &items, control(ControlKey::Toggle), true);
        assert_eq!(t, Transition::unchanged(None));
    }

    #[test]
    fn select_edits_highlighted_item() {
        let items = vec![Item::new("1", "Arroz").with_quantity(2)];
        let state = SearchState::search("rr");
        let t = run(Some(&state), &items, control(ControlKey::Select), true);

        let next = t.next_state.unwrap();
        assert_eq!(next.id, Some(ItemId::from("1")));
        assert_eq!(next.text, "Arroz");
        assert_eq!(next.quantity, Some(2));
    }

    #[test]
    fn select_while_editing_with_text_demotes_to_search() {
        let items = vec![Item::new("1", "Arroz").with_priority(1)];
        let state = SearchState::editing(&items[0]);
        let t = run(Some(&state), &items, control(ControlKey::Select), true);

        assert_eq!(t.next_state, Some(SearchState::search("Arroz")));
        assert_eq!(t.next_items, None);
    }

    #[test]
    fn select_while_editing_empty_cancels() {
        let items = vec![Item::new("1", "Arroz")];
        let state = SearchState::editing(&items[0]).with_text("");
        let t = run(Some(&state), &items, control(ControlKey::Select), true);
        assert_eq!(t, Transition::cancel());
    }

    #[test]
    fn delete_requires_editing() {
        let items = vec![Item::new("1", "Arroz")];
        let state = SearchState::search("Arroz");
        let t = run(Some(&state), &items, control(ControlKey::Delete), true);
        assert_eq!(t, Transition::unchanged(Some(&state)));
    }

    #[test]
    fn delete_approved_removes_item() {
        let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
        let state = SearchState::editing(&items[0]);
        let t = run(Some(&state), &items, control(ControlKey::Delete), true);

        assert_eq!(t.next_state, None);
        assert_eq!(t.next_items, Some(vec![Item::new("2", "Pan")]));
    }

    #[test]
    fn delete_prompt_names_item() {
        struct Recording(Vec<String>);
        impl crate::app::services::Confirm for Recording {
            fn confirm(&mut self, prompt: &str) -> bool {
                self.0.push(prompt.to_string());
                false
            }
        }

        let items = vec![Item::new("1", "Arroz")];
        let state = SearchState::editing(&items[0]);
        let mut confirm = Recording(vec![]);
        let mut ids = FixedIds(vec![]);
        let mut services = Services::new(&mut confirm, &mut ids);
        handle_key(Some(&state), &items, control(ControlKey::Delete), &mut services);

        assert_eq!(confirm.0, vec!["Delete Arroz?".to_string()]);
    }

    #[test]
    fn adjustments_are_noops_outside_edit_mode() {
        let items = vec![Item::new("1", "Arroz")];
        let t = run(None, &items, control(ControlKey::Increase), true);
        assert_eq!(t, Transition::unchanged(None));
    }

    #[test]
    fn quantity_floors_at_one() {
        let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
        let state = SearchState::editing(&items[1]);
        let t = run(Some(&state), &items, control(ControlKey::Decrease), true);
        let next = t.next_items.unwrap();
        assert_eq!(next[1].quantity, 1);
        assert_eq!(next[1].id, ItemId::from("2"));

        let t = run(Some(&state), &next, control(ControlKey::Increase), true);
        assert_eq!(t.next_items.unwrap()[1].quantity, 2);
    }

    #[test]
    fn backspace_to_empty_keeps_edit_mode() {
        let items = vec![Item::new("1", "A")];
        let state = SearchState::editing(&items[0]);
        let t = run(Some(&state), &items, control(ControlKey::Backspace), true);

        let next = t.next_state.unwrap();
        assert_eq!(next.text, "");
        assert_eq!(next.id, Some(ItemId::from("1")));
    }

    #[test]
    fn backspace_to_empty_while_searching_cancels() {
        let state = SearchState::search("A");
        let t = run(Some(&state), &[], control(ControlKey::Backspace), true);
        assert_eq!(t, Transition::cancel());
    }

    #[test]
    fn leading_space_never_starts_search() {
        let t = run(None, &[], control(ControlKey::Space), true);
        assert_eq!(t, Transition::cancel());
    }

    #[test]
    fn dangling_edit_id_acts_as_search() {
        let items = vec![Item::new("1", "Arroz")];
        let state = SearchState {
            id: Some(ItemId::from("gone")),
            text: "Arr".to_string(),
            ..SearchState::default()
        };

        let t = run(Some(&state), &items, control(ControlKey::Toggle), true);
        assert_eq!(t.next_state, None);
        assert!(t.next_items.unwrap()[0].completed);
    }

    #[test]
    fn item_long_press_while_editing_cancels() {
        let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
        let state = SearchState::editing(&items[0]);
        let mut confirm = AutoConfirm(true);
        let mut ids = FixedIds(vec![]);
        let mut services = Services::new(&mut confirm, &mut ids);

        let t = handle_event(
            Some(&state),
            &items,
            &Event::ItemLongPressed(ItemId::from("2")),
            &mut services,
        );
        assert_eq!(t, Transition::cancel());

        let t = handle_event(None, &items, &Event::ItemLongPressed(ItemId::from("2")), &mut services);
        assert_eq!(t.next_state, Some(SearchState::editing(&items[1])));
    }

    #[test]
    fn item_press_toggles_and_keeps_state() {
        let items = vec![Item::new("1", "Arroz"), Item::new("2", "Pan")];
        let state = SearchState::search("p");
        let mut confirm = AutoConfirm(true);
        let mut ids = FixedIds(vec![]);
        let mut services = Services::new(&mut confirm, &mut ids);

        let t = handle_event(
            Some(&state),
            &items,
            &Event::ItemPressed(ItemId::from("2")),
            &mut services,
        );
        assert_eq!(t.next_state, Some(state));
        let next = t.next_items.unwrap();
        assert_eq!(next[0].id, ItemId::from("2"));
        assert!(next[0].completed);
    }
}
