use std::collections::HashSet;

use proptest::prelude::*;

use keylist::app::services::{AutoConfirm, IdGenerator, RandomIds, Services};
use keylist::app::{AppState, ControlKey, Event, Key};
use keylist::storage::MemoryStore;
use keylist::{seed_items, ItemId};

/// Replays `pool` (collisions included), then never-seen ids.
struct CollidingIds {
    pool: Vec<String>,
    drawn: usize,
}

impl IdGenerator for CollidingIds {
    fn next_id(&mut self) -> ItemId {
        let id = self
            .pool
            .get(self.drawn)
            .cloned()
            .unwrap_or_else(|| format!("fresh-{}", self.drawn));
        self.drawn += 1;
        ItemId::new(id)
    }
}

fn event_alphabet() -> Vec<Event> {
    let mut events: Vec<Event> = ControlKey::ALL
        .into_iter()
        .map(|key| Event::Key(Key::Control(key)))
        .collect();
    events.extend("aeLPÑ 1".chars().map(|c| Event::Key(Key::Character(c))));
    events.extend(
        seed_items()
            .into_iter()
            .flat_map(|item| [Event::ItemPressed(item.id.clone()), Event::ItemLongPressed(item.id)]),
    );
    events
}

proptest! {
    #[test]
    fn created_ids_are_unique(
        names in prop::collection::vec("[a-z]{1,6}", 1..12),
        pool in prop::collection::vec("[ab1]", 0..24),
    ) {
        let mut app = AppState::new(MemoryStore::new(seed_items()));
        let mut confirm = AutoConfirm(true);
        let mut ids = CollidingIds { pool, drawn: 0 };
        let mut services = Services::new(&mut confirm, &mut ids);

        for name in &names {
            for c in name.chars() {
                app.dispatch(&Event::Key(Key::Character(c)), &mut services).unwrap();
            }
            // create, then save again to leave edit mode
            app.dispatch(&Event::Key(Key::Control(ControlKey::Save)), &mut services).unwrap();
            app.dispatch(&Event::Key(Key::Control(ControlKey::Save)), &mut services).unwrap();
            prop_assert!(app.search().is_none());
        }

        let items = app.items().unwrap();
        prop_assert_eq!(items.len(), seed_items().len() + names.len());
        let distinct: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(distinct.len(), items.len());
    }

    #[test]
    fn any_event_sequence_keeps_items_valid(
        events in prop::collection::vec(prop::sample::select(event_alphabet()), 0..80),
    ) {
        let mut app = AppState::new(MemoryStore::new(seed_items()));
        let mut confirm = AutoConfirm(true);
        let mut ids = RandomIds;
        let mut services = Services::new(&mut confirm, &mut ids);

        for event in &events {
            app.dispatch(event, &mut services).unwrap();

            let items = app.items().unwrap();
            prop_assert!(items.iter().all(|i| i.quantity >= 1));
            let distinct: HashSet<_> = items.iter().map(|i| &i.id).collect();
            prop_assert_eq!(distinct.len(), items.len());

            let view = app.view().unwrap();
            if let Some(id) = &view.highlighted {
                prop_assert!(view.rows.iter().any(|row| &row.id == id && row.is_highlighted));
            }
        }
    }

    #[test]
    fn cancel_from_browsing_changes_nothing(
        events in prop::collection::vec(prop::sample::select(event_alphabet()), 0..30),
    ) {
        let mut app = AppState::new(MemoryStore::new(seed_items()));
        let mut confirm = AutoConfirm(false);
        let mut ids = RandomIds;
        let mut services = Services::new(&mut confirm, &mut ids);
        let cancel = Event::Key(Key::Control(ControlKey::LongPressBackspace));

        for event in &events {
            app.dispatch(event, &mut services).unwrap();
        }
        if app.search().is_none() {
            let before = app.items().unwrap();
            app.dispatch(&cancel, &mut services).unwrap();
            prop_assert!(app.search().is_none());
            prop_assert_eq!(app.items().unwrap(), before);
        }
    }
}
