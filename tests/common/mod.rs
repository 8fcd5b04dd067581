#![allow(dead_code)]

use keylist::app::services::{AutoConfirm, IdGenerator};
use keylist::app::{AppState, Event, Services};
use keylist::storage::MemoryStore;
use keylist::{Item, ItemId, Key};

/// Hands out ids from a fixed list, then `gen-<n>`.
#[derive(Debug, Default)]
pub struct ScriptedIds {
    queue: Vec<&'static str>,
    drawn: usize,
}

impl ScriptedIds {
    pub fn new(ids: &[&'static str]) -> Self {
        Self {
            queue: ids.iter().rev().copied().collect(),
            drawn: 0,
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&mut self) -> ItemId {
        self.drawn += 1;
        self.queue
            .pop()
            .map_or_else(|| ItemId::new(format!("gen-{}", self.drawn)), ItemId::from)
    }
}

/// Session over a memory store with scripted collaborators.
pub struct Harness {
    pub app: AppState<MemoryStore>,
    pub confirm: AutoConfirm,
    pub ids: ScriptedIds,
}

impl Harness {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            app: AppState::new(MemoryStore::new(items)),
            confirm: AutoConfirm(true),
            ids: ScriptedIds::default(),
        }
    }

    pub fn send(&mut self, event: Event) {
        let mut services = Services::new(&mut self.confirm, &mut self.ids);
        self.app.dispatch(&event, &mut services).unwrap();
    }

    pub fn press(&mut self, key: &str) {
        let key: Key = key.parse().unwrap();
        self.send(Event::Key(key));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Key(Key::Character(c)));
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.app.items().unwrap()
    }
}
