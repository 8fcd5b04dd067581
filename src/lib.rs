//! Keylist: a checklist editor driven by a virtual-keyboard state machine.
//!
//! A small fixed keyboard (letters, digits and a handful of control keys) is
//! the only way to create, find, edit, complete and delete items. Every key
//! press goes through one pure transition function; the session applies its
//! result to a persisted item store and projects the view again.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI driver (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Keys, keyboard layout, gestures                  │
//! │  - Transition handler                               │
//! │  - Session (AppState)                               │
//! └─────────────────────────────────────────────────────┘
//!              │                           │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Storage Layer         │
//! │ - View projection     │   │ (storage/)            │
//! │ - View model          │   │ - ItemStore trait     │
//! │ - Text renderer       │   │ - JSON / memory       │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Item model, errors (domain/)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # keylist.toml
//! data_file = "~/lists/groceries.json"
//! trace_level = "debug"
//! seed_items = false
//! ```
//!
//! # Example
//!
//! ```
//! use keylist::app::services::{AutoConfirm, RandomIds, Services};
//! use keylist::app::{AppState, ControlKey, Event, Key};
//! use keylist::storage::MemoryStore;
//!
//! let mut app = AppState::new(MemoryStore::new(keylist::seed_items()));
//! let (mut confirm, mut ids) = (AutoConfirm(true), RandomIds);
//! let mut services = Services::new(&mut confirm, &mut ids);
//!
//! for key in ["L", "E", "C"] {
//!     app.dispatch(&Event::Key(key.parse()?), &mut services)?;
//! }
//! let view = app.view()?;
//! assert_eq!(view.rows[0].name, "Leche");
//! assert_eq!(view.highlighted, Some("3".into()));
//! # Ok::<(), keylist::KeylistError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, handle_key, AppState, ControlKey, Event, Key, Mode, SearchState};
pub use domain::{seed_items, Item, ItemId, KeylistError, Result};
pub use storage::{ItemStore, JsonStore, MemoryStore};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Built from a TOML file, a string map (e.g. collected from the command
/// line), or [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Item file. `~` is expanded. Default: `<data dir>/items.json`.
    pub data_file: Option<String>,

    /// `EnvFilter` directive for trace export. `None` disables tracing.
    pub trace_level: Option<String>,

    /// Start from the seed list when the item file does not exist yet.
    pub seed_items: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            trace_level: None,
            seed_items: true,
        }
    }
}

impl Config {
    /// Builds a configuration from loose key/value pairs.
    ///
    /// Unknown keys are ignored and unparseable values fall back to their
    /// defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use keylist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_file".to_string(), "/tmp/list.json".to_string());
    /// map.insert("seed_items".to_string(), "no".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_file.as_deref(), Some("/tmp/list.json"));
    /// assert!(!config.seed_items);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let seed_items = map
            .get("seed_items")
            .and_then(|v| parse_flag(v))
            .unwrap_or(true);

        Self {
            data_file: non_empty("data_file"),
            trace_level: non_empty("trace_level"),
            seed_items,
        }
    }

    /// # Errors
    ///
    /// Returns [`KeylistError::Config`] for malformed TOML, wrongly typed
    /// values or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| KeylistError::Config(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`KeylistError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| KeylistError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Resolved item file location.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_file.as_deref().map_or_else(
            infrastructure::default_data_file,
            |file| PathBuf::from(infrastructure::expand_tilde(file)),
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Opens the configured item file and starts a session in browsing mode.
///
/// Tracing is set up separately with [`observability::init_tracing`].
///
/// # Errors
///
/// Fails if the data directory cannot be created or the item file exists but
/// cannot be read or parsed.
pub fn initialize(config: &Config) -> Result<AppState<JsonStore>> {
    let path = config.data_path();
    tracing::debug!(path = %path.display(), seed = config.seed_items, "initializing keylist");

    let seed = if config.seed_items {
        seed_items()
    } else {
        Vec::new()
    };

    Ok(AppState::new(JsonStore::open(path, seed)?))
}
